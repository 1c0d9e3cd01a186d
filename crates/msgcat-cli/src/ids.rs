//! Message ids and macro keys shipped with the bundled language files.

use msgcat_i18n::{message_keys, RustEmbedResources};
use rust_embed::RustEmbed;

message_keys! {
    /// Messages defined by the bundled language files.
    pub enum MessageId {
        CommandSuccessHome => "COMMAND_SUCCESS_HOME",
        CommandSuccessSpawn => "COMMAND_SUCCESS_SPAWN",
        TeleportWarmup => "TELEPORT_WARMUP",
        TeleportCooldown => "TELEPORT_COOLDOWN",
        TeleportCancelled => "TELEPORT_CANCELLED",
    }
}

message_keys! {
    /// Placeholders the bundled messages substitute.
    pub enum MacroKey {
        PlayerName => "PLAYER_NAME",
        Destination => "DESTINATION",
        Duration => "DURATION",
    }
}

/// Language files compiled into the binary.
#[derive(RustEmbed)]
#[folder = "resources/"]
pub struct BundledLanguages;

/// The bundled language files as catalog defaults.
#[must_use]
pub const fn bundled_resources() -> RustEmbedResources<BundledLanguages> {
    RustEmbedResources::new()
}
