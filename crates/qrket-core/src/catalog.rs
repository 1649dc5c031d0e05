//! The social network catalog.
//!
//! The catalog is the fixed set of supported networks and their display
//! attributes. Records do not reference the catalog: at creation time the
//! selected entry is copied into the record as a [`NetworkSnapshot`], so
//! later catalog edits never change existing records.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{Error, ValidationError};

/// A supported social network, identified by its catalog key.
///
/// # Example
///
/// ```
/// use qrket_core::Network;
///
/// let network = Network::from_key("instagram").unwrap();
/// assert_eq!(network.info().color, "#E4405F");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Network {
    Instagram,
    Facebook,
    Twitter,
    Linkedin,
    Whatsapp,
    Youtube,
    Tiktok,
    Website,
}

/// Display attributes of a catalog entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NetworkInfo {
    /// Human-readable display name.
    pub name: &'static str,
    /// Icon the renderer should use for this network.
    pub icon: Icon,
    /// Brand color as an RGB hex string.
    pub color: &'static str,
    /// Example URL shown as an input placeholder.
    pub placeholder: &'static str,
}

/// Renderer icon capability.
///
/// Every [`Network`] maps to exactly one icon; [`Icon::Generic`] exists
/// only for snapshot data whose icon name is no longer in the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Icon {
    Instagram,
    Facebook,
    Twitter,
    Linkedin,
    MessageCircle,
    Youtube,
    Music,
    Globe,
    Generic,
}

impl Icon {
    /// Icon identifier as stored in snapshots.
    pub fn name(self) -> &'static str {
        match self {
            Icon::Instagram => "Instagram",
            Icon::Facebook => "Facebook",
            Icon::Twitter => "Twitter",
            Icon::Linkedin => "Linkedin",
            Icon::MessageCircle => "MessageCircle",
            Icon::Youtube => "Youtube",
            Icon::Music => "Music",
            Icon::Globe => "Globe",
            Icon::Generic => "Globe",
        }
    }

    /// Resolve a persisted icon name, falling back to a generic icon for
    /// names no current catalog entry uses.
    pub fn from_name(name: &str) -> Icon {
        match name {
            "Instagram" => Icon::Instagram,
            "Facebook" => Icon::Facebook,
            "Twitter" => Icon::Twitter,
            "Linkedin" => Icon::Linkedin,
            "MessageCircle" => Icon::MessageCircle,
            "Youtube" => Icon::Youtube,
            "Music" => Icon::Music,
            "Globe" => Icon::Globe,
            _ => Icon::Generic,
        }
    }
}

impl Network {
    /// All catalog entries, in presentation order.
    pub const ALL: [Network; 8] = [
        Network::Instagram,
        Network::Facebook,
        Network::Twitter,
        Network::Linkedin,
        Network::Whatsapp,
        Network::Youtube,
        Network::Tiktok,
        Network::Website,
    ];

    /// The stable catalog key (e.g. `"instagram"`).
    pub fn key(self) -> &'static str {
        match self {
            Network::Instagram => "instagram",
            Network::Facebook => "facebook",
            Network::Twitter => "twitter",
            Network::Linkedin => "linkedin",
            Network::Whatsapp => "whatsapp",
            Network::Youtube => "youtube",
            Network::Tiktok => "tiktok",
            Network::Website => "website",
        }
    }

    /// Look up a catalog entry by key.
    ///
    /// # Errors
    ///
    /// Returns a validation error if the key is not in the catalog.
    pub fn from_key(key: &str) -> Result<Self, Error> {
        match key {
            "instagram" => Ok(Network::Instagram),
            "facebook" => Ok(Network::Facebook),
            "twitter" => Ok(Network::Twitter),
            "linkedin" => Ok(Network::Linkedin),
            "whatsapp" => Ok(Network::Whatsapp),
            "youtube" => Ok(Network::Youtube),
            "tiktok" => Ok(Network::Tiktok),
            "website" => Ok(Network::Website),
            _ => Err(ValidationError::UnknownNetwork {
                key: key.to_string(),
            }
            .into()),
        }
    }

    /// Display attributes for this entry.
    pub fn info(self) -> &'static NetworkInfo {
        match self {
            Network::Instagram => &NetworkInfo {
                name: "Instagram",
                icon: Icon::Instagram,
                color: "#E4405F",
                placeholder: "https://instagram.com/usuario",
            },
            Network::Facebook => &NetworkInfo {
                name: "Facebook",
                icon: Icon::Facebook,
                color: "#1877F2",
                placeholder: "https://facebook.com/pagina",
            },
            Network::Twitter => &NetworkInfo {
                name: "Twitter/X",
                icon: Icon::Twitter,
                color: "#1DA1F2",
                placeholder: "https://twitter.com/usuario",
            },
            Network::Linkedin => &NetworkInfo {
                name: "LinkedIn",
                icon: Icon::Linkedin,
                color: "#0A66C2",
                placeholder: "https://linkedin.com/in/usuario",
            },
            Network::Whatsapp => &NetworkInfo {
                name: "WhatsApp",
                icon: Icon::MessageCircle,
                color: "#25D366",
                placeholder: "https://wa.me/5511999999999",
            },
            Network::Youtube => &NetworkInfo {
                name: "YouTube",
                icon: Icon::Youtube,
                color: "#FF0000",
                placeholder: "https://youtube.com/c/canal",
            },
            Network::Tiktok => &NetworkInfo {
                name: "TikTok",
                icon: Icon::Music,
                color: "#000000",
                placeholder: "https://tiktok.com/@usuario",
            },
            Network::Website => &NetworkInfo {
                name: "Website",
                icon: Icon::Globe,
                color: "#6B7280",
                placeholder: "https://meusite.com.br",
            },
        }
    }
}

impl fmt::Display for Network {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for Network {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_key(s)
    }
}

/// The by-value copy of a catalog entry embedded in each record.
///
/// Fields stay plain strings so that snapshots taken under an older
/// catalog round-trip unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NetworkSnapshot {
    /// Display name at creation time.
    pub name: String,
    /// Icon identifier at creation time.
    pub icon: String,
    /// Brand color at creation time.
    pub color: String,
    /// URL placeholder at creation time.
    pub placeholder: String,
}

impl NetworkSnapshot {
    /// Resolve the snapshot's icon, defaulting to a generic icon for
    /// legacy values.
    pub fn icon(&self) -> Icon {
        Icon::from_name(&self.icon)
    }
}

impl From<Network> for NetworkSnapshot {
    fn from(network: Network) -> Self {
        let info = network.info();
        Self {
            name: info.name.to_string(),
            icon: info.icon.name().to_string(),
            color: info.color.to_string(),
            placeholder: info.placeholder.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn key_roundtrip() {
        for network in Network::ALL {
            assert_eq!(Network::from_key(network.key()).unwrap(), network);
        }
    }

    #[test]
    fn unknown_key_is_rejected() {
        let err = Network::from_key("myspace").unwrap_err();
        assert!(matches!(
            err,
            Error::Validation(ValidationError::UnknownNetwork { .. })
        ));
    }

    #[test]
    fn instagram_attributes() {
        let info = Network::Instagram.info();
        assert_eq!(info.name, "Instagram");
        assert_eq!(info.color, "#E4405F");
    }

    #[test]
    fn snapshot_copies_catalog_entry() {
        let snapshot = NetworkSnapshot::from(Network::Whatsapp);
        assert_eq!(snapshot.name, "WhatsApp");
        assert_eq!(snapshot.icon, "MessageCircle");
        assert_eq!(snapshot.icon(), Icon::MessageCircle);
    }

    #[test]
    fn legacy_icon_names_resolve_to_generic() {
        assert_eq!(Icon::from_name("Telegram"), Icon::Generic);
    }

    #[test]
    fn snapshot_serde_field_names() {
        let snapshot = NetworkSnapshot::from(Network::Website);
        let json = serde_json::to_value(&snapshot).unwrap();
        assert_eq!(json["name"], "Website");
        assert_eq!(json["icon"], "Globe");
        assert_eq!(json["color"], "#6B7280");
        assert_eq!(json["placeholder"], "https://meusite.com.br");
    }
}
