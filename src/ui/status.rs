use console::{
	style,
	Color,
};

/// Kind of a status line, rendered as a colored prefix.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Status
{
	Info,
	Success,
	Error,
}

impl Status
{
	fn label(self) -> (&'static str, Color)
	{
		match self {
			Status::Info => ("info:", Color::Cyan),
			Status::Success => ("success:", Color::Green),
			Status::Error => ("error:", Color::Red),
		}
	}

	pub fn format<I: AsRef<str>>(
		self,
		input: I,
	) -> String
	{
		let (label, color) = self.label();
		format!("{} {}", style(label).fg(color).bold().bright(), input.as_ref())
	}
}
