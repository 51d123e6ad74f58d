pub mod detail_modal;
pub mod subscription_row;
