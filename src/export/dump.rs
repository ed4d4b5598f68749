//! Export orchestration
//!
//! # Error Handling Strategy
//!
//! Every failure is fatal. The first API, parse or filesystem error aborts the whole run
//! with context describing what was being exported; files already written stay on disk and
//! the working directory is kept so it can be inspected.

use std::path::Path;

use anyhow::{Context, Result};
use chrono::{Local, TimeZone};
use tracing::{info, warn};

use super::archive::create_zip;
use super::writer::{DirectoryWriter, ExportSink, write_json};
use crate::api::{RoomKind, SlackApi};
use crate::config::ExportConfig;
use crate::error::ConfigError;
use crate::history::{UNKNOWN_DAY, fetch_all_pages, for_each_day_batch, order_history};
use crate::models::{Message, Room};
use crate::rooms::{RoomSelection, build_manifest};
use crate::utils::{room_file_path, validate_room_dir};

const USERS_FILE: &str = "users.json";
const CHANNELS_FILE: &str = "channels.json";

/// Counts reported at the end of a run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExportSummary {
    pub users: usize,
    pub rooms: usize,
    pub messages: usize,
    /// Day files written across all rooms
    pub day_files: usize,
}

/// Dumps users, rooms and room histories from a [`SlackApi`] into an [`ExportSink`]
pub struct Exporter<'a, A: ?Sized, S: ?Sized, Tz = Local> {
    api: &'a A,
    sink: &'a mut S,
    selection: RoomSelection,
    tz: Tz,
}

impl<'a, A, S> Exporter<'a, A, S, Local>
where
    A: SlackApi + ?Sized,
    S: ExportSink + ?Sized,
{
    pub fn new(api: &'a A, sink: &'a mut S, selection: RoomSelection) -> Self {
        Self { api, sink, selection, tz: Local }
    }
}

impl<'a, A, S, Tz> Exporter<'a, A, S, Tz>
where
    A: SlackApi + ?Sized,
    S: ExportSink + ?Sized,
    Tz: TimeZone,
{
    /// Partition days in `tz` instead of the local zone
    pub fn with_time_zone<Tz2: TimeZone>(self, tz: Tz2) -> Exporter<'a, A, S, Tz2> {
        Exporter { api: self.api, sink: self.sink, selection: self.selection, tz }
    }

    /// Write `users.json`, every selected room's history and `channels.json`
    pub fn run(&mut self) -> Result<ExportSummary> {
        let users = self.dump_users()?;
        let (_, mut summary) = self.dump_rooms()?;
        summary.users = users;
        Ok(summary)
    }

    pub fn dump_users(&mut self) -> Result<usize> {
        let users = self.api.list_users().context("Failed to list users")?;
        write_json(&mut *self.sink, Path::new(USERS_FILE), &users)?;
        info!(count = users.len(), "dumped users");
        Ok(users.len())
    }

    /// Dump public rooms, then private rooms, then the unified manifest
    pub fn dump_rooms(&mut self) -> Result<(Vec<Room>, ExportSummary)> {
        let mut summary = ExportSummary::default();

        let public = self.api.list_rooms(false).context("Failed to list channels")?;
        let public = self.selection.filter(public, |room| room.name.as_str());
        for room in &public {
            let (messages, files) = self.dump_room(RoomKind::Public, &room.id, &room.name)?;
            summary.messages += messages;
            summary.day_files += files;
        }

        let private = self.api.list_private_rooms(false).context("Failed to list groups")?;
        let private = self.selection.filter(private, |room| room.name.as_str());
        for room in &private {
            let (messages, files) = self.dump_room(RoomKind::Private, &room.id, &room.name)?;
            summary.messages += messages;
            summary.day_files += files;
        }

        let manifest = build_manifest(public, private);
        write_json(&mut *self.sink, Path::new(CHANNELS_FILE), &manifest)?;
        summary.rooms = manifest.len();
        info!(count = manifest.len(), "wrote room manifest");

        Ok((manifest, summary))
    }

    /// Fetch, order and partition one room, writing a file per local calendar day
    ///
    /// Messages whose `ts` cannot be parsed are gathered into a single `unknown.json` written
    /// after the dated files. Returns the number of messages and files written.
    pub fn dump_room(&mut self, kind: RoomKind, id: &str, name: &str) -> Result<(usize, usize)> {
        validate_room_dir(name).with_context(|| format!("Cannot export room {}", id))?;
        info!(room = name, kind = kind.as_str(), "dumping room");

        let api = self.api;
        let messages = fetch_all_pages(id, |request| {
            api.fetch_history(kind, id, request).map_err(anyhow::Error::from)
        })?;
        if messages.is_empty() {
            return Ok((0, 0));
        }

        let total = messages.len();
        let ordered = order_history(messages);

        let sink = &mut *self.sink;
        let mut files = 0;
        let mut undated: Vec<Message> = Vec::new();
        for_each_day_batch(name, ordered, &self.tz, |batch| {
            if batch.day == UNKNOWN_DAY {
                undated.extend(batch.messages);
                return Ok(());
            }
            let path = room_file_path(name, &batch.file_name())?;
            write_json(&mut *sink, &path, &batch.messages)?;
            files += 1;
            Ok(())
        })?;

        if !undated.is_empty() {
            warn!(room = name, count = undated.len(), "messages without a usable timestamp");
            let path = room_file_path(name, &format!("{}.json", UNKNOWN_DAY))?;
            write_json(sink, &path, &undated)?;
            files += 1;
        }

        info!(room = name, messages = total, files, "room done");
        Ok((total, files))
    }
}

/// Full run against `api`: verify the token, dump into a fresh working directory and
/// package it as the configured zip archive
///
/// # Errors
///
/// A failing auth test is reported as [`ConfigError::InvalidToken`] before anything is
/// fetched. Any later failure leaves the working directory in place and logs its path.
pub fn export_workspace<A: SlackApi + ?Sized>(
    api: &A,
    config: &ExportConfig,
) -> Result<ExportSummary> {
    api.auth_test().map_err(ConfigError::InvalidToken)?;

    let mut builder = tempfile::Builder::new();
    builder.prefix("slack-dump");
    let workdir = match &config.work_root {
        Some(root) => builder.tempdir_in(root),
        None => builder.tempdir(),
    }
    .context("Failed to create working directory")?;
    info!(dir = %workdir.path().display(), "exporting to working directory");

    let result = dump_and_archive(api, config, workdir.path());
    if result.is_err() || config.keep_dir {
        let kept = workdir.keep();
        if result.is_err() {
            warn!(dir = %kept.display(), "export failed, partial output left in place");
        } else {
            info!(dir = %kept.display(), "kept working directory");
        }
    }

    result
}

fn dump_and_archive<A: SlackApi + ?Sized>(
    api: &A,
    config: &ExportConfig,
    dir: &Path,
) -> Result<ExportSummary> {
    let mut writer = DirectoryWriter::new(dir);
    let summary = Exporter::new(api, &mut writer, config.rooms.clone()).run()?;

    let entries = create_zip(dir, &config.output)?;
    info!(
        archive = %config.output.display(),
        entries,
        users = summary.users,
        rooms = summary.rooms,
        messages = summary.messages,
        "export complete"
    );

    Ok(summary)
}
