//! Configuration surface of the game server
//!
//! Declaration order matters: section markers open a section and every
//! following property belongs to it until the next marker.

use super::property::Property;
use crate::domain::{EnumDef, ValueKind};

/// Attack modes a new character can start in
pub static ATTACK_MODE: EnumDef = EnumDef::new(
    "AttackMode",
    &["Peace", "Group", "Guild", "WarRedBrown", "All"],
);

use ValueKind::{Bool, Duration, Enum, Timestamp, F64, I32, U16, U32};
use ValueKind::String as Text;

/// Settings exposed by the running game server
pub static SERVER_PROPERTIES: &[Property] = &[
    // Network
    Property::new("IPAddress", Text, "0.0.0.0")
        .section("Network")
        .describe("Listen address", "Address the server binds to, 0.0.0.0 for all interfaces")
        .restart(),
    Property::new("Port", U16, "7000")
        .describe("Game port", "Game server port (1-65535)")
        .restart(),
    Property::new("TimeOut", Duration, "00:00:20")
        .describe("Connection timeout", "Idle time before a client connection is dropped"),
    Property::new("PingDelay", Duration, "00:00:02")
        .describe("Ping interval", "Interval between keep-alive packets"),
    Property::new("UserCountPort", U16, "3000")
        .describe("User count port", "Port of the user count service")
        .restart(),
    Property::new("MaxPacket", I32, "50")
        .describe("Packets per second", "Packets a client may send per second before it is banned"),
    Property::new("PacketBanTime", Duration, "00:05:00")
        .describe("Packet ban time", "Ban length after exceeding the packet limit"),
    Property::new("UseProxy", Bool, "false")
        .describe("Behind proxy", "Whether a reverse proxy sits in front of the server"),
    Property::new("ConnectionLimit", I32, "200")
        .describe("Connection limit", "Maximum concurrent connections (1-65533)"),
    // System
    Property::new("DBSaveDelay", Duration, "00:05:00")
        .section("System")
        .describe("Save interval", "Interval between automatic database saves"),
    Property::new("MapPath", Text, "./Map/")
        .describe("Map path", "Directory holding map files")
        .restart(),
    Property::new("MasterPassword", Text, "")
        .describe("Master password", "Password required by GM commands (sensitive)"),
    Property::new("ClientPath", Text, "")
        .describe("Client path", "Directory holding client patch files"),
    Property::new("ReleaseDate", Timestamp, "2017-12-22 00:00:00")
        .describe("Release date", "Date the server was released"),
    Property::new("TestServer", Bool, "false")
        .describe("Test server", "Run in test server mode"),
    Property::new("StarterGuildName", Text, "Starter Guild")
        .describe("Starter guild", "Guild new players join automatically"),
    Property::new("EasterEventEnd", Timestamp, "2000-01-01 00:00:00")
        .describe("Easter event end", "End of the Easter event"),
    Property::new("HalloweenEventEnd", Timestamp, "2000-01-01 00:00:00")
        .describe("Halloween event end", "End of the Halloween event"),
    Property::new("ChristmasEventEnd", Timestamp, "2000-01-01 00:00:00")
        .describe("Christmas event end", "End of the Christmas event"),
    Property::new("UpgradeChunkSize", I32, "250000")
        .describe("Patch chunk size", "Size in bytes of client patch chunks"),
    Property::new("PlayerBackupInterval", Duration, "60")
        .describe("Backup interval", "Interval between player data backups"),
    Property::new("CleanupIntervalMinutes", I32, "30")
        .describe("Cleanup interval", "Minutes between expired data cleanups"),
    // Control
    Property::new("AllowLogin", Bool, "true")
        .section("Control")
        .describe("Allow login", "Whether players may log in"),
    Property::new("AdminOnlyLogin", Bool, "false")
        .describe("Admin only login", "Only administrators may log in"),
    Property::new("AllowNewAccount", Bool, "true")
        .describe("Allow registration", "Whether new accounts may be registered"),
    Property::new("AllowChangePassword", Bool, "true")
        .describe("Allow password change", "Whether users may change their password"),
    Property::new("AllowRequestPasswordReset", Bool, "true")
        .describe("Allow reset requests", "Whether users may request a password reset"),
    Property::new("AllowDeleteAccount", Bool, "true")
        .describe("Allow account deletion", "Whether users may delete their account"),
    Property::new("AllowNewCharacter", Bool, "true")
        .describe("Allow new characters", "Whether new characters may be created"),
    Property::new("AllowDeleteCharacter", Bool, "true")
        .describe("Allow character deletion", "Whether characters may be deleted"),
    Property::new("RelogDelay", Duration, "00:00:10")
        .describe("Relog delay", "Wait before a disconnected player may log in again"),
    Property::new("AllowWarrior", Bool, "true"),
    Property::new("AllowWizard", Bool, "true"),
    Property::new("AllowTaoist", Bool, "true"),
    Property::new("AllowAssassin", Bool, "true"),
    Property::new("AllowStartGame", Bool, "true")
        .describe("Allow start game", "Whether players may enter the game world"),
    // Mail
    Property::new("MailServer", Text, "smtp.gmail.com")
        .section("Mail")
        .describe("SMTP server", "Mail server host"),
    Property::new("MailPort", I32, "587").describe("SMTP port", "Mail server port"),
    Property::new("MailUseSSL", Bool, "true").describe("Use SSL", "Encrypt the SMTP connection"),
    Property::new("MailAccount", Text, "").describe("Mail account", "Account used to send mail"),
    Property::new("MailPassword", Text, "")
        .describe("Mail password", "Password of the mail account (sensitive)"),
    Property::new("MailFrom", Text, "").describe("Sender address", "From address of sent mail"),
    Property::new("MailDisplayName", Text, "Admin")
        .describe("Sender name", "Display name of sent mail"),
    // WebServer
    Property::new("WebPrefix", Text, "http://*:80/Command")
        .section("WebServer")
        .describe("Web command prefix", "Listen prefix of the web command service")
        .restart(),
    Property::new("WebCommandLink", Text, "https://www.zirconserver.com/Command")
        .describe("Web command link", "Public address of the web command service"),
    Property::new("ActivationSuccessLink", Text, "https://www.zirconserver.com/activation-successful"),
    Property::new("ActivationFailLink", Text, "https://www.zirconserver.com/activation-unsuccessful"),
    Property::new("ResetSuccessLink", Text, "https://www.zirconserver.com/password-reset-successful"),
    Property::new("ResetFailLink", Text, "https://www.zirconserver.com/password-reset-unsuccessful"),
    Property::new("BuyPrefix", Text, "http://*:80/BuyGameGold/")
        .describe("Purchase prefix", "Listen prefix of the purchase service")
        .restart(),
    Property::new("IPNPrefix", Text, "http://*:80/IPN/")
        .describe("IPN prefix", "Listen prefix of the payment notification service")
        .restart(),
    Property::new("ReceiverEMail", Text, "")
        .describe("Receiver email", "Address receiving payments"),
    Property::new("ProcessGameGold", Bool, "true")
        .describe("Process game gold", "Whether game gold purchases are processed"),
    Property::new("AllowBuyGammeGold", Bool, "true")
        .describe("Allow buying game gold", "Whether game gold may be bought"),
    // Players
    Property::new("MaxViewRange", I32, "18")
        .section("Players")
        .describe("View range", "Maximum view range of a player"),
    Property::new("ShoutDelay", Duration, "00:00:10")
        .describe("Shout delay", "Minimum time between shouts"),
    Property::new("GlobalDelay", Duration, "00:01:00")
        .describe("Global chat delay", "Minimum time between global messages"),
    Property::new("MaxLevel", I32, "10").describe("Level cap", "Highest level a player can reach"),
    Property::new("DayCycleCount", I32, "3")
        .describe("Day cycles", "Day/night cycles per real day"),
    Property::new("AllowObservation", Bool, "true")
        .describe("Allow observation", "Whether players may be observed"),
    Property::new("DefaultAttackMode", Enum(&ATTACK_MODE), "All")
        .describe("Default attack mode", "Attack mode new characters start in"),
    Property::new("BrownDuration", Duration, "00:01:00")
        .describe("Brown name duration", "How long a player stays brown"),
    Property::new("PKPointRate", I32, "50")
        .describe("PK point decay", "PK points removed per tick"),
    Property::new("PKPointTickRate", Duration, "00:01:00")
        .describe("PK point tick", "Interval between PK point decay ticks"),
    Property::new("RedPoint", I32, "200").describe("Red name points", "PK points to turn red"),
    Property::new("PvPCurseDuration", Duration, "00:20:00")
        .describe("PvP curse duration", "Length of the PvP curse"),
    Property::new("PvPCurseRate", I32, "4").describe("PvP curse rate", "Strength of the PvP curse"),
    Property::new("AutoReviveDelay", Duration, "00:10:00")
        .describe("Auto revive delay", "Wait before a dead player revives automatically"),
    // Monsters
    Property::new("DeadDuration", Duration, "00:01:00")
        .section("Monsters")
        .describe("Corpse duration", "How long a monster corpse remains"),
    Property::new("HarvestDuration", Duration, "00:05:00")
        .describe("Harvest duration", "How long a corpse can be harvested"),
    Property::new("MysteryShipRegionIndex", I32, "697")
        .describe("Mystery ship region", "Region index of the mystery ship"),
    Property::new("DropNothingTypeCommonItem", Bool, "false")
        .describe("Drop untyped items", "Whether untyped common items drop"),
    Property::new("SummonMonsterLifetimeMinutes", I32, "30")
        .describe("Summon lifetime", "Minutes a summoned monster survives"),
    // Items
    Property::new("DropDuration", Duration, "01:00:00")
        .section("Items")
        .describe("Drop duration", "How long a dropped item stays on the ground"),
    Property::new("DropDistance", I32, "5").describe("Drop distance", "Spread of dropped items"),
    Property::new("DropLayers", I32, "5").describe("Drop layers", "Items stacked per cell"),
    Property::new("TorchRate", I32, "10").describe("Torch rate", "Light strength of torches"),
    Property::new("SpecialRepairDelay", Duration, "02:00:00")
        .describe("Special repair delay", "Cooldown of special repair"),
    Property::new("MaxLuck", I32, "10").describe("Max luck", "Highest luck on an item"),
    Property::new("MaxCurse", I32, "-10").describe("Max curse", "Lowest curse on an item"),
    Property::new("CurseRate", I32, "20").describe("Curse chance", "Chance of a curse (%)"),
    Property::new("LuckRate", I32, "10").describe("Luck chance", "Chance of luck (%)"),
    Property::new("MaxStrength", I32, "5").describe("Max strength", "Highest item strength"),
    Property::new("MonsterDropGroupShare", Bool, "true")
        .describe("Group drop share", "Share monster drops within a group"),
    Property::new("CanSeeOthersDropped", Bool, "false")
        .describe("See others' drops", "Whether drops of other players are visible"),
    Property::new("MonsterDropProtectionDuration", U32, "60")
        .describe("Drop protection", "Seconds a drop is reserved for its owner"),
    // Rates
    Property::new("ExperienceRate", I32, "0")
        .section("Rates")
        .describe("Experience rate", "Experience multiplier, 0 for default"),
    Property::new("DropRate", I32, "0").describe("Drop rate", "Drop multiplier, 0 for default"),
    Property::new("GoldRate", I32, "0").describe("Gold rate", "Gold multiplier, 0 for default"),
    Property::new("CompanionRate", I32, "0")
        .describe("Companion rate", "Companion experience multiplier"),
    Property::new("BossDropRate", F64, "1.0")
        .describe("Boss drop rate", "Drop multiplier for bosses"),
    // Admin
    Property::new("AdminEnabled", Bool, "true")
        .section("Admin")
        .describe("Console enabled", "Whether the web console is enabled")
        .restart(),
    Property::new("AdminPort", U16, "8080")
        .describe("Console port", "Port the web console listens on")
        .restart(),
    Property::new("AdminAllowedIPs", Text, "")
        .describe("Allowed IPs", "Comma separated IP allow list, empty for no restriction"),
];
