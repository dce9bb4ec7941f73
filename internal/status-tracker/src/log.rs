// Copyright 2022 Adobe. All rights reserved.
// This file is licensed to you under the Apache License,
// Version 2.0 (http://www.apache.org/licenses/LICENSE-2.0)
// or the MIT license (http://opensource.org/licenses/MIT),
// at your option.

// Unless required by applicable law or agreed to in writing,
// this software is distributed on an "AS IS" BASIS, WITHOUT
// WARRANTIES OR REPRESENTATIONS OF ANY KIND, either express or
// implied. See the LICENSE-MIT and LICENSE-APACHE files for the
// specific language governing permissions and limitations under
// each license.

use std::{borrow::Cow, fmt::Debug};

use serde::Serialize;

use crate::StatusTracker;

/// Detailed information about a trust-store entry that was checked, skipped,
/// or failed.
///
/// Use the [`log_item`](crate::log_item) macro to create a `LogItem`.
#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct LogItem {
    /// Kind of log item
    pub kind: LogKind,

    /// Alias of the trust-store entry, or other descriptive label
    pub label: Cow<'static, str>,

    /// Human-readable description of the condition
    pub description: Cow<'static, str>,

    /// Source file where the condition was detected
    pub file: Cow<'static, str>,

    /// Function where the condition was detected
    pub function: Cow<'static, str>,

    /// Source line number where the condition was detected
    pub line: u32,

    /// Error code as string
    #[serde(skip_serializing_if = "Option::is_none")]
    pub err_val: Option<Cow<'static, str>>,

    /// Status code (see [`status_codes`](crate::status_codes))
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status_code: Option<Cow<'static, str>>,
}

impl LogItem {
    /// Create a new `LogItem` without going through the
    /// [`log_item`](crate::log_item) macro.
    pub fn new<S1, S2, S3, S4>(
        label: S1,
        description: S2,
        function: S3,
        file: S4,
        line: u32,
    ) -> Self
    where
        S1: Into<Cow<'static, str>>,
        S2: Into<Cow<'static, str>>,
        S3: Into<Cow<'static, str>>,
        S4: Into<Cow<'static, str>>,
    {
        Self {
            kind: LogKind::Informational,
            label: label.into(),
            description: description.into(),
            file: file.into(),
            function: function.into(),
            line,
            err_val: None,
            status_code: None,
        }
    }

    /// Captures the description from the value (typically an `Error` enum) as
    /// additional information for this `LogItem` struct.
    ///
    /// IMPORTANT: This is implemented using the [`Debug`](std::fmt::Debug)
    /// trait, but in common practice, the `Error` enum from any crate is likely
    /// to fulfill this requirement.
    ///
    /// ## Example
    ///
    /// ```
    /// # use std::borrow::Cow;
    /// # use certkat_status_tracker::{log_item, LogItem, LogKind};
    /// let log = log_item!("test1", "test item 1", "test func").error("sample error message");
    ///
    /// assert_eq!(log.kind, LogKind::Failure);
    /// assert_eq!(log.err_val, Some(Cow::Borrowed("\"sample error message\"")));
    /// ```
    pub fn error<E: Debug>(self, err: E) -> Self {
        LogItem {
            kind: LogKind::Failure,
            err_val: Some(format!("{err:?}").into()),
            ..self
        }
    }

    /// Add a status code.
    ///
    /// ## Example
    ///
    /// ```
    /// # use std::borrow::Cow;
    /// # use certkat_status_tracker::{log_item, status_codes, LogItem};
    /// let log = log_item!("test1", "test item 1", "test func")
    ///     .status_code(status_codes::SIGNATURE_VERIFIED);
    ///
    /// assert_eq!(
    ///     log.status_code,
    ///     Some(Cow::Borrowed("certificate.signature.verified"))
    /// );
    /// ```
    pub fn status_code(self, code: &'static str) -> Self {
        LogItem {
            status_code: Some(code.into()),
            ..self
        }
    }

    /// Record this item as a success in the given tracker.
    pub fn success(mut self, tracker: &mut StatusTracker) {
        self.kind = LogKind::Success;
        tracker.add_non_error(self);
    }

    /// Record this item as informational in the given tracker.
    pub fn informational(mut self, tracker: &mut StatusTracker) {
        self.kind = LogKind::Informational;
        tracker.add_non_error(self);
    }

    /// Record this item as a failure in the given tracker, capturing `err`.
    ///
    /// Returns `Err(err)` if the tracker is configured to stop on the first
    /// error.
    pub fn failure<E: Debug>(self, tracker: &mut StatusTracker, err: E) -> Result<(), E> {
        let item = self.error(&err);
        tracker.add_error(item, err)
    }
}

/// Classifies a [`LogItem`].
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LogKind {
    /// The check passed.
    Success,

    /// Nothing was checked, or the condition does not affect the outcome.
    Informational,

    /// The check failed.
    Failure,
}

/// Creates a [`LogItem`] struct that is annotated with the source file and line
/// number where the log condition was discovered.
///
/// Takes three parameters, each of which may be a `'static str` or `String`:
///
/// * `label`: name of object this LogItem references (typically a trust-store
///   alias)
/// * `description`: human-readable reason for this `LogItem` to have been
///   generated
/// * `function`: name of the function generating this `LogItem`
///
/// ## Example
///
/// ```
/// # use std::borrow::Cow;
/// # use certkat_status_tracker::{log_item, LogItem, LogKind};
/// let log = log_item!("test1", "test item 1", "test func");
///
/// assert_eq!(
///     log,
///     LogItem {
///         kind: LogKind::Informational,
///         label: Cow::Borrowed("test1"),
///         description: Cow::Borrowed("test item 1"),
///         file: Cow::Borrowed(file!()),
///         function: Cow::Borrowed("test func"),
///         line: log.line,
///         err_val: None,
///         status_code: None,
///     }
/// );
/// #
/// # assert!(log.line > 2);
/// ```
#[macro_export]
macro_rules! log_item {
    ($label:expr, $description:expr, $function:expr) => {{
        $crate::LogItem::new($label, $description, $function, file!(), line!())
    }};
}
