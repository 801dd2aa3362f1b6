mod view;
pub use view::ProductView;
