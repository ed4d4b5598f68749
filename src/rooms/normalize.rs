//! Conversion of both room kinds into the one [`Room`] record
//!
//! Private groups are presented as ordinary channels in the manifest: `is_channel` is forced
//! to true and `is_general` to false, which is what importers of the export format expect.

use crate::api::{PrivateRoom, PublicRoom};
use crate::models::Room;

pub fn from_public(room: PublicRoom) -> Room {
    Room {
        id: room.id,
        name: room.name,
        created: room.created,
        creator: room.creator,
        is_archived: room.is_archived,
        is_channel: room.is_channel,
        is_general: room.is_general,
        is_member: room.is_member,
        members: room.members,
        num_members: room.num_members,
        topic: room.topic,
        purpose: room.purpose,
        last_read: room.last_read,
        latest: room.latest,
        unread_count: room.unread_count,
        unread_count_display: room.unread_count_display,
    }
}

pub fn from_private(room: PrivateRoom) -> Room {
    Room {
        id: room.id,
        name: room.name,
        created: room.created,
        creator: room.creator,
        is_archived: room.is_archived,
        is_channel: true,
        is_general: false,
        is_member: room.is_member,
        members: room.members,
        num_members: room.num_members,
        topic: room.topic,
        purpose: room.purpose,
        last_read: room.last_read,
        latest: room.latest,
        unread_count: room.unread_count,
        unread_count_display: room.unread_count_display,
    }
}

/// Public rooms first, then private ones, each group in its original order
pub fn build_manifest(public: Vec<PublicRoom>, private: Vec<PrivateRoom>) -> Vec<Room> {
    let mut rooms = Vec::with_capacity(public.len() + private.len());
    rooms.extend(public.into_iter().map(from_public));
    rooms.extend(private.into_iter().map(from_private));
    rooms
}
