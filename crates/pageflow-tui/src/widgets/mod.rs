pub mod dots;
pub mod help;
pub mod hint;
pub mod sections;
pub mod status_bar;

pub use dots::DotsWidget;
pub use help::HelpWidget;
pub use hint::HintWidget;
pub use sections::SectionsWidget;
pub use status_bar::StatusBarWidget;
