pub mod dialogs;
pub mod homeworks;
pub mod login;
pub mod nav_menu;
pub mod settings;
pub mod students;
pub mod table;
pub mod teachers;

pub use dialogs::with_dialogs;
pub use homeworks::homeworks_panel;
pub use login::login_screen;
pub use nav_menu::nav_menu;
pub use settings::settings_screen;
pub use students::students_panel;
pub use teachers::teachers_panel;
