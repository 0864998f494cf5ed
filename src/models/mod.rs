pub mod form;
pub mod language;
pub mod loaders;
pub mod score;

pub use form::{CheckForm, CheckSubmission, SheetImage};
pub use language::Language;
pub use loaders::{load_sheet_image, load_sheet_images_from_dir};
pub use score::ScoreResult;
