//! Modal dialog chrome shared by every form and detail popup.

pub mod modal_sheet;
