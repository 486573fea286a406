//! Capture of an error together with the context it was raised in.
//!
//! A `CapturedError` is created once, at the point where a failure is turned
//! into data, and then only ever shared. Returning it again through `Err`
//! (see `Outcome::value_or_throw`) hands back the very same capture: the
//! original error object, its source chain, the caller location, the
//! backtrace, and the timestamp are all untouched.

use chrono::{DateTime, Utc};
use std::backtrace::Backtrace;
use std::error::Error as StdError;
use std::fmt;
use std::panic::Location;
use std::sync::Arc;

/// Boxed, thread-safe error accepted by every capturing factory.
pub type BoxError = Box<dyn StdError + Send + Sync + 'static>;

struct Capture {
    error: BoxError,
    location: &'static Location<'static>,
    backtrace: Backtrace,
    captured_at: DateTime<Utc>,
}

/// An error held as data, replayable with its original context.
///
/// Cloning shares the capture. Equality is identity: two values are equal
/// only if they are clones of the same capture.
///
/// # Example
///
/// ```rust
/// use tagged::outcome::CapturedError;
///
/// let io = std::io::Error::new(std::io::ErrorKind::NotFound, "config.toml");
/// let captured = CapturedError::new(io);
///
/// assert_eq!(captured.to_string(), "config.toml");
/// assert!(captured.is::<std::io::Error>());
/// assert!(captured.same_capture(&captured.clone()));
/// ```
#[derive(Clone)]
pub struct CapturedError {
    capture: Arc<Capture>,
}

impl CapturedError {
    /// Capture `error` at the caller's location.
    ///
    /// Re-capturing a boxed `CapturedError` returns that capture unchanged
    /// instead of nesting it.
    #[track_caller]
    pub fn new<E>(error: E) -> Self
    where
        E: Into<BoxError>,
    {
        let location = Location::caller();
        match error.into().downcast::<CapturedError>() {
            Ok(captured) => *captured,
            Err(error) => Self {
                capture: Arc::new(Capture {
                    error,
                    location,
                    backtrace: Backtrace::capture(),
                    captured_at: Utc::now(),
                }),
            },
        }
    }

    /// The original error object.
    pub fn error(&self) -> &(dyn StdError + Send + Sync + 'static) {
        &*self.capture.error
    }

    /// Where the error was captured.
    pub fn location(&self) -> &'static Location<'static> {
        self.capture.location
    }

    /// Backtrace taken at capture time; honours `RUST_BACKTRACE`.
    pub fn backtrace(&self) -> &Backtrace {
        &self.capture.backtrace
    }

    pub fn captured_at(&self) -> DateTime<Utc> {
        self.capture.captured_at
    }

    pub fn message(&self) -> String {
        self.capture.error.to_string()
    }

    pub fn downcast_ref<E>(&self) -> Option<&E>
    where
        E: StdError + 'static,
    {
        self.capture.error.downcast_ref::<E>()
    }

    pub fn is<E>(&self) -> bool
    where
        E: StdError + 'static,
    {
        self.capture.error.is::<E>()
    }

    /// Whether both values are the same capture.
    pub fn same_capture(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.capture, &other.capture)
    }
}

impl fmt::Display for CapturedError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.capture.error, f)
    }
}

impl fmt::Debug for CapturedError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CapturedError")
            .field("error", &self.capture.error)
            .field("location", &self.capture.location)
            .field("captured_at", &self.capture.captured_at)
            .finish()
    }
}

impl StdError for CapturedError {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        self.capture.error.source()
    }
}

impl PartialEq for CapturedError {
    fn eq(&self, other: &Self) -> bool {
        self.same_capture(other)
    }
}

impl Eq for CapturedError {}
