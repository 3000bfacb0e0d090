//! UI Components
//!
//! Reusable Leptos components.

mod add_option_form;
mod delete_confirm_button;
mod notice_bar;
mod option_list;
mod wheel_canvas;

pub use add_option_form::AddOptionForm;
pub use delete_confirm_button::DeleteConfirmButton;
pub use notice_bar::NoticeBar;
pub use option_list::OptionList;
pub use wheel_canvas::WheelCanvas;
