// fmm-mod-creator: FMM x MOD Creator build core
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Library root.
//!
//! # Crate Architecture
//!
//! ```text
//!                        main.rs
//!                           |
//!                +----------+----------+
//!                v                     v
//!             cli (clap)          cmd (handlers)
//!                |       build / validate / records / config
//!                +----------+----------+
//!                           v
//!              ,---------------------------,
//!              |          config           |
//!              |  JSON + TOML, layered     |
//!              '--+--------------------+---'
//!                 |                    |
//!                 v                    v
//!               build               record
//!       service -> pipeline       store, restore
//!     validate/layout/archive    (JSON history file)
//!                 |                    |
//!                 +---------+----------+
//!                           v
//!                        project
//!                (editor state, blocks)
//!
//!   +-----------------------------------------+
//!   |  foundation   error, logging, utility   |
//!   +-----------------------------------------+
//! ```

pub mod build;
pub mod cli;
pub mod cmd;
pub mod config;
pub mod error;
pub mod logging;
pub mod project;
pub mod record;
pub mod utility;
