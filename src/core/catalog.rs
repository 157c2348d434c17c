//! Fixed feature and permission tables.
//!
//! Both tables are read-only, process-wide data. Order matters: rows are
//! rendered (and permission outcomes returned) in table order.

/// A boolean presence test against the host environment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PresenceTest {
    /// A boolean property on `navigator`, e.g. `cookieEnabled`.
    NavigatorFlag(&'static str),
    /// `"<name>" in window`.
    WindowMember(&'static str),
    /// `"<name>" in navigator`.
    NavigatorMember(&'static str),
}

impl PresenceTest {
    pub fn subject(self) -> &'static str {
        match self {
            PresenceTest::NavigatorFlag(n)
            | PresenceTest::WindowMember(n)
            | PresenceTest::NavigatorMember(n) => n,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Feature {
    pub rank: u32,
    pub name: &'static str,
    pub test: PresenceTest,
    /// Literal expression shown next to the result.
    pub expression: &'static str,
}

pub static FEATURES: [Feature; 6] = [
    Feature {
        rank: 1,
        name: "Cookies",
        test: PresenceTest::NavigatorFlag("cookieEnabled"),
        expression: "navigator.cookieEnabled",
    },
    Feature {
        rank: 2,
        name: "BarcodeDetector",
        test: PresenceTest::WindowMember("BarcodeDetector"),
        expression: "!!(BarcodeDetector in window)",
    },
    Feature {
        rank: 3,
        name: "Crypto",
        test: PresenceTest::WindowMember("Crypto"),
        expression: "!!(Crypto in window)",
    },
    Feature {
        rank: 4,
        name: "serviceWorker",
        test: PresenceTest::NavigatorMember("serviceWorker"),
        expression: "!!(serviceWorker in navigator)",
    },
    Feature {
        rank: 5,
        name: "PaymentRequest",
        test: PresenceTest::WindowMember("PaymentRequest"),
        expression: "!!(PaymentRequest in window)",
    },
    Feature {
        rank: 6,
        name: "localStorage",
        test: PresenceTest::WindowMember("localStorage"),
        expression: "!!(localStorage in window)",
    },
];

/// Argument for one `navigator.permissions.query` call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PermissionDescriptor {
    pub name: &'static str,
    /// Only set for `push`: Chrome only supports push messages that show a
    /// notification.
    pub user_visible_only: Option<bool>,
}

impl PermissionDescriptor {
    const fn plain(name: &'static str) -> Self {
        Self {
            name,
            user_visible_only: None,
        }
    }

    const fn user_visible(name: &'static str) -> Self {
        Self {
            name,
            user_visible_only: Some(true),
        }
    }
}

pub static PERMISSIONS: [PermissionDescriptor; 19] = [
    PermissionDescriptor::plain("geolocation"),
    PermissionDescriptor::plain("notifications"),
    PermissionDescriptor::user_visible("push"),
    PermissionDescriptor::plain("midi"),
    PermissionDescriptor::plain("camera"),
    PermissionDescriptor::plain("microphone"),
    PermissionDescriptor::plain("speaker"),
    PermissionDescriptor::plain("device-info"),
    PermissionDescriptor::plain("background-fetch"),
    PermissionDescriptor::plain("background-sync"),
    PermissionDescriptor::plain("bluetooth"),
    PermissionDescriptor::plain("persistent-storage"),
    PermissionDescriptor::plain("ambient-light-sensor"),
    PermissionDescriptor::plain("accelerometer"),
    PermissionDescriptor::plain("gyroscope"),
    PermissionDescriptor::plain("magnetometer"),
    PermissionDescriptor::plain("clipboard"),
    PermissionDescriptor::plain("display-capture"),
    PermissionDescriptor::plain("nfc"),
];

pub fn permission_names() -> impl Iterator<Item = &'static str> {
    PERMISSIONS.iter().map(|d| d.name)
}
