use serde::{Deserialize, Serialize};

/// Colors and behavior flags of a player. Doubles as the create and update
/// payload, since both accept the same optional fields.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerTheme {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub link_hover: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub track_played: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub track_unplayed: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub track_background: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background_top: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background_bottom: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background_text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enable_api: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enable_controls: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub force_autoplay: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hide_title: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub force_loop: Option<bool>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Player {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub player_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assets: Option<PlayerAssets>,
    #[serde(flatten)]
    pub theme: PlayerTheme,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PlayerAssets {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub logo: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn player_flattens_theme() {
        let upstream = json!({
            "playerId": "pt2ZzMYTDH1iw7MjE3kaZ2wL",
            "createdAt": "2020-01-13T10:09:17+00:00",
            "linkHover": "rgba(255, 255, 255, 1)",
            "forceAutoplay": false,
            "assets": {"logo": "https://cdn.api.video/player/logo.png"}
        });
        let player: Player = serde_json::from_value(upstream.clone()).unwrap();
        assert_eq!(player.theme.force_autoplay, Some(false));
        assert_eq!(serde_json::to_value(&player).unwrap(), upstream);
    }
}
