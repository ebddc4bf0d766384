//! The shortener form controller.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, PoisonError};
use std::time::Duration;

use tokio::task::JoinHandle;
use tracing::{debug, error, info, warn};

use crate::domain::entities::{ShortLink, ShortenRequest};
use crate::domain::form::{
    COPY_DONE_LABEL, COPY_FAILED_LABEL, COPY_LABEL, COPY_SUCCESS_BACKGROUND, SUBMIT_BUSY_LABEL,
    SUBMIT_LABEL,
};
use crate::domain::ports::{ClipboardWriter, FormSurface, ShortenApi};
use crate::error::FormError;

/// How long copy feedback stays visible before the label reverts.
pub const DEFAULT_COPY_FEEDBACK: Duration = Duration::from_millis(2000);

/// How a call to [`ShortenerController::submit`] settled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    Shortened(ShortLink),
    Failed(FormError),
    /// The submit control was disabled; nothing was sent.
    Ignored,
}

/// How a call to [`ShortenerController::copy_short_url`] settled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CopyOutcome {
    Copied,
    Failed(FormError),
    /// No result link has been shown yet.
    NothingToCopy,
}

/// Drives one form: submits shortening requests and copies results.
///
/// Constructing the controller is the mount step. [`Self::unmount`] (also run
/// on drop) cancels label-revert timers that have not fired yet.
///
/// # Concurrency
///
/// At most one request is in flight: the submit control is disabled on entry
/// and re-enabled by a drop guard, so cleanup also runs when the `submit`
/// future is dropped half-way. Copy operations are independent of submits and
/// of each other; each schedules its own revert timer.
pub struct ShortenerController<A, C, S>
where
    A: ShortenApi,
    C: ClipboardWriter,
    S: FormSurface + 'static,
{
    api: Arc<A>,
    clipboard: Arc<C>,
    surface: Arc<S>,
    copy_feedback: Duration,
    submitting: AtomicBool,
    revert_timers: Mutex<Vec<JoinHandle<()>>>,
}

impl<A, C, S> ShortenerController<A, C, S>
where
    A: ShortenApi,
    C: ClipboardWriter,
    S: FormSurface + 'static,
{
    /// Mounts a controller on `surface` and puts its controls in the idle state.
    pub fn new(api: Arc<A>, clipboard: Arc<C>, surface: Arc<S>, copy_feedback: Duration) -> Self {
        surface.set_submit_control(true, SUBMIT_LABEL);
        surface.set_copy_label(COPY_LABEL);
        surface.set_copy_background(None);

        Self {
            api,
            clipboard,
            surface,
            copy_feedback,
            submitting: AtomicBool::new(false),
            revert_timers: Mutex::new(Vec::new()),
        }
    }

    pub fn surface(&self) -> &Arc<S> {
        &self.surface
    }

    /// Whether the submit control is currently disabled by an in-flight request.
    pub fn is_submitting(&self) -> bool {
        self.submitting.load(Ordering::Acquire)
    }

    /// Submits the form's current contents.
    ///
    /// # Flow
    ///
    /// 1. Hide both panels, disable submit, label it `Shortening...`
    /// 2. Build a [`ShortenRequest`] from the fields and send it once
    /// 3. Success: show the result link and reset the fields
    /// 4. Failure: show `Error: <message>`; fields are kept
    /// 5. Always: re-enable submit with its default label
    pub async fn submit(&self) -> SubmitOutcome {
        if self.submitting.swap(true, Ordering::AcqRel) {
            debug!("Submit ignored, a request is already in flight");
            return SubmitOutcome::Ignored;
        }

        self.surface.hide_panels();
        self.surface.set_submit_control(false, SUBMIT_BUSY_LABEL);
        let _reenable = SubmitGuard {
            surface: &*self.surface,
            submitting: &self.submitting,
        };

        let request = ShortenRequest::from(&self.surface.read_fields());
        debug!(
            url = %request.url,
            custom_short = %request.custom_short,
            expiry = ?request.expiry,
            "Submitting shorten request"
        );

        match self.api.shorten(&request).await {
            Ok(link) => {
                info!(short_url = %link.target, "Short link created");
                self.surface.show_result(&link);
                self.surface.reset_fields();
                SubmitOutcome::Shortened(link)
            }
            Err(err) => {
                warn!(kind = err.kind(), error = %err, "Shorten request failed");
                self.surface.show_error(&err.panel_message());
                SubmitOutcome::Failed(err)
            }
        }
    }

    /// Copies the current result link's target to the clipboard.
    ///
    /// Success shows `Copied!` on the success background; failure shows
    /// `Failed` and leaves the background alone. Either way the label goes
    /// back to `Copy` once the feedback window has passed.
    pub async fn copy_short_url(&self) -> CopyOutcome {
        let Some(target) = self.surface.result_target() else {
            debug!("Copy ignored, no short link has been shown");
            return CopyOutcome::NothingToCopy;
        };

        match self.clipboard.write_text(&target).await {
            Ok(()) => {
                debug!(short_url = %target, "Short link copied");
                self.surface
                    .set_copy_background(Some(COPY_SUCCESS_BACKGROUND));
                self.surface.set_copy_label(COPY_DONE_LABEL);
                self.schedule_copy_revert(true);
                CopyOutcome::Copied
            }
            Err(err) => {
                error!(error = %err, "Failed to copy");
                self.surface.set_copy_label(COPY_FAILED_LABEL);
                self.schedule_copy_revert(false);
                CopyOutcome::Failed(err)
            }
        }
    }

    /// Cancels pending copy-label reverts.
    pub fn unmount(&self) {
        let mut timers = self.timers();
        for timer in timers.drain(..) {
            timer.abort();
        }
    }

    fn schedule_copy_revert(&self, restore_background: bool) {
        let surface = Arc::clone(&self.surface);
        let delay = self.copy_feedback;

        let timer = tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            surface.set_copy_label(COPY_LABEL);
            if restore_background {
                surface.set_copy_background(None);
            }
        });

        let mut timers = self.timers();
        timers.retain(|timer| !timer.is_finished());
        timers.push(timer);
    }

    fn timers(&self) -> std::sync::MutexGuard<'_, Vec<JoinHandle<()>>> {
        self.revert_timers
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
    }
}

impl<A, C, S> Drop for ShortenerController<A, C, S>
where
    A: ShortenApi,
    C: ClipboardWriter,
    S: FormSurface + 'static,
{
    fn drop(&mut self) {
        self.unmount();
    }
}

/// Re-enables the submit control when a submission ends, however it ends.
struct SubmitGuard<'a, S: FormSurface> {
    surface: &'a S,
    submitting: &'a AtomicBool,
}

impl<S: FormSurface> Drop for SubmitGuard<'_, S> {
    fn drop(&mut self) {
        self.surface.set_submit_control(true, SUBMIT_LABEL);
        self.submitting.store(false, Ordering::Release);
    }
}
