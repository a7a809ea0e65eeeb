// envdesk: Environment Desk for the Chatbot Builder stack
//
// SPDX-FileCopyrightText: 2026 Envdesk Contributors
// SPDX-License-Identifier: GPL-3.0-or-later

use std::path::Path;

use super::{ConfigError, EnvdeskError, EnvdeskResult, StoreError};

#[test]
fn test_config_error_display() {
    let err = ConfigError::DuplicateVar {
        var: "PORT".to_string(),
    };
    insta::assert_snapshot!(err.to_string(), @"variable 'PORT' is listed more than once in the catalog");
}

#[test]
fn test_store_error_keeps_path_and_source() {
    let source = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
    let err = StoreError::write(Path::new("backend/.env"), source);

    assert_eq!(err.path(), Path::new("backend/.env"));
    assert!(std::error::Error::source(&err).is_some());
    insta::assert_snapshot!(err.to_string(), @"failed to write 'backend/.env': denied");
}

#[test]
fn test_store_error_boxes_into_envdesk_error() {
    let err: EnvdeskError = StoreError::read(
        Path::new(".env"),
        std::io::Error::other("boom"),
    )
    .into();
    insta::assert_snapshot!(err.to_string(), @"store error: failed to read '.env': boom");
}

#[test]
fn test_envdesk_error_size() {
    // Every variant is a thin Box, so discriminant + pointer = 16 bytes
    let size = std::mem::size_of::<EnvdeskError>();
    assert!(size <= 16, "EnvdeskError is {size} bytes, expected <= 16");
}

#[test]
fn test_envdesk_result_size() {
    let size = std::mem::size_of::<EnvdeskResult<()>>();
    assert!(size <= 24, "EnvdeskResult<()> is {size} bytes, expected <= 24");
}
