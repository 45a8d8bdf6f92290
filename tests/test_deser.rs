use std::fs::File;

use parley::model::prelude::*;
use serde::de::Deserialize;
use serde_json::Value;

macro_rules! p {
    ($s:ty, $filename:expr) => {{
        let f = File::open(concat!("./tests/resources/", $filename, ".json")).unwrap();
        let v = serde_json::from_reader::<File, Value>(f).unwrap();
        <$s>::deserialize(v).unwrap()
    }};
}

#[test]
fn modal_submit_guild() {
    let interaction = p!(ModalInteraction, "modal_submit_guild");

    assert_eq!(interaction.guild_id, Some(GuildId::new(381880193251409931)));
    assert_eq!(interaction.guild_locale.as_deref(), Some("en-US"));
    assert_eq!(interaction.user.display_name(), "Zeyla");

    let member = interaction.member.as_ref().unwrap();
    assert_eq!(member.guild_id, interaction.guild_id);
    assert!(member.has_role(RoleId::new(381880193251409932)));
    assert!(member.permissions.contains(Permissions::ADMINISTRATOR));
    assert_eq!(interaction.app_permissions, Some(Permissions::SEND_MESSAGES));
}

#[test]
fn modal_submit_dm() {
    let interaction = p!(ModalInteraction, "modal_submit_dm");

    assert!(interaction.guild_id.is_none());
    assert!(interaction.member.is_none());
    assert_eq!(interaction.user.name, "luna");
    assert_eq!(interaction.locale, "fr");

    let message = interaction.message.as_deref().unwrap();
    assert!(message.author.bot);
    assert!(!message.is_ephemeral());
    assert_eq!(
        message.link(),
        "https://discord.com/channels/@me/1115346416417693736/1182384570387128430"
    );
}

#[test]
fn guild() {
    let guild = p!(Guild, "guild");

    assert_eq!(guild.owner_id, UserId::new(114941315417899012));
    assert_eq!(guild.features, ["COMMUNITY", "NEWS"]);

    let maintainers = guild.role(RoleId::new(381880193251409932)).unwrap();
    assert!(maintainers.hoist);
    assert!(guild.roles.iter().max() == Some(maintainers));

    let ferris = &guild.emojis[0];
    assert_eq!(ferris.to_string(), "<:ferris:381880356007231488>");
    assert_eq!(ferris.url(), "https://cdn.discordapp.com/emojis/381880356007231488.png");
}

#[test]
fn bans() {
    let bans = p!(Vec<Ban>, "bans");

    assert_eq!(bans.len(), 2);
    assert_eq!(bans[0].reason.as_deref(), Some("spam"));
    assert!(bans[1].reason.is_none());
    assert!(bans[1].user.bot);
}
