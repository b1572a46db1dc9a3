//! Registry of well-known keybinding-bearing schemas
//!
//! An explicit table of the namespaces known to carry accelerator-list
//! keys, instead of reflecting over the backend's full key namespace.
//! Custom launcher bindings live under a dynamically sized list of
//! sub-paths and are enumerated by the store adapter at query time.

/// Describes one fixed schema known to carry keybinding keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SchemaDescriptor {
    pub id: &'static str,
    /// Default category for keys the classifier cannot place by name.
    pub category: &'static str,
}

/// Well-known fixed schemas, in enumeration order.
pub const KNOWN_SCHEMAS: &[SchemaDescriptor] = &[
    SchemaDescriptor {
        id: "org.gnome.desktop.wm.keybindings",
        category: "window-management",
    },
    SchemaDescriptor {
        id: "org.gnome.shell.keybindings",
        category: "shell",
    },
    SchemaDescriptor {
        id: "org.gnome.settings-daemon.plugins.media-keys",
        category: "media",
    },
    SchemaDescriptor {
        id: "org.gnome.mutter.keybindings",
        category: "window-management",
    },
    SchemaDescriptor {
        id: "org.gnome.mutter.wayland.keybindings",
        category: "window-management",
    },
    SchemaDescriptor {
        id: "org.gnome.shell.extensions.tiling-assistant",
        category: "tiling",
    },
];

/// Schema holding the list of custom keybinding sub-paths.
pub const CUSTOM_SCHEMA: &str = "org.gnome.settings-daemon.plugins.media-keys";

/// Relocatable schema instantiated once per custom keybinding path.
pub const CUSTOM_BINDING_SCHEMA: &str =
    "org.gnome.settings-daemon.plugins.media-keys.custom-keybinding";

/// Path prefix under which custom keybinding instances are created.
pub const CUSTOM_PATH_PREFIX: &str =
    "/org/gnome/settings-daemon/plugins/media-keys/custom-keybindings";

/// Look up the descriptor for a schema id, if it is one of the fixed set.
pub fn descriptor(schema_id: &str) -> Option<&'static SchemaDescriptor> {
    KNOWN_SCHEMAS.iter().find(|d| d.id == schema_id)
}
