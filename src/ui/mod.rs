pub mod status;

use std::{
	borrow::Cow,
	time::Duration,
};

use indicatif::{
	MultiProgress,
	ProgressBar,
	ProgressDrawTarget,
};

use crate::ui::status::Status;

/// Status output on stderr. Data printed by commands goes to stdout instead.
#[derive(Clone)]
pub struct UI
{
	bar_manager: MultiProgress,
}

impl UI
{
	pub fn new(quiet: bool) -> UI
	{
		UI {
			bar_manager: MultiProgress::with_draw_target(match quiet {
				true => ProgressDrawTarget::hidden(),
				false => ProgressDrawTarget::stderr(),
			}),
		}
	}

	pub fn create_spinner(
		&self,
		message: impl Into<Cow<'static, str>>,
	) -> ProgressBar
	{
		let spinner = self
			.bar_manager
			.add(ProgressBar::new_spinner().with_message(message));
		spinner.enable_steady_tick(Duration::from_millis(100));
		spinner
	}

	pub fn println<I: AsRef<str>>(
		&self,
		msg: I,
		status: Status,
	)
	{
		// Hidden draw targets swallow output, nothing to report either way.
		let _ = self.bar_manager.println(status.format(msg));
	}
}
