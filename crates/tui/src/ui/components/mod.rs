pub mod build_info;
pub mod component;
pub mod environment_menu;
pub mod extensions;
pub mod hint_bar;
pub mod key_value_table;
pub mod server_info;
pub mod tabs;
pub mod toolbar;

pub use build_info::BuildInfoComponent;
pub(crate) use component::Component;
pub use environment_menu::EnvironmentMenuComponent;
pub use extensions::ExtensionsComponent;
pub use server_info::ServerInfoComponent;
pub use tabs::TabsComponent;
pub use toolbar::ToolbarComponent;
