use super::paginated;
use crate::descriptor::EndpointDescriptor;
use crate::models::{Page, Player, PlayerTheme};
use crate::types::ParamKind;

/// Theme fields shared by create and update.
fn themed(descriptor: EndpointDescriptor) -> EndpointDescriptor {
    descriptor
        .field("text", ParamKind::String, "RGBA color for timer text. Default: rgba(255, 255, 255, 1)")
        .field("link", ParamKind::String, "RGBA color for all controls. Default: rgba(255, 255, 255, 1)")
        .field("linkHover", ParamKind::String, "RGBA color for all controls when hovered. Default: rgba(255, 255, 255, 1)")
        .field("trackPlayed", ParamKind::String, "RGBA color playback bar: played content. Default: rgba(88, 131, 255, .95)")
        .field("trackUnplayed", ParamKind::String, "RGBA color playback bar: downloaded but unplayed (buffered) content. Default: rgba(255, 255, 255, .35)")
        .field("trackBackground", ParamKind::String, "RGBA color playback bar: background. Default: rgba(255, 255, 255, .2)")
        .field("backgroundTop", ParamKind::String, "RGBA color: top 50% of background. Default: rgba(0, 0, 0, .7)")
        .field("backgroundBottom", ParamKind::String, "RGBA color: bottom 50% of background. Default: rgba(0, 0, 0, .7)")
        .field("backgroundText", ParamKind::String, "RGBA color for title text. Default: rgba(255, 255, 255, 1)")
        .field("enableApi", ParamKind::Boolean, "enable/disable player SDK access. Default: true")
        .field("enableControls", ParamKind::Boolean, "enable/disable player controls. Default: true")
        .field("forceAutoplay", ParamKind::Boolean, "enable/disable player autoplay. Default: false")
        .field("hideTitle", ParamKind::Boolean, "enable/disable title. Default: false")
        .field("forceLoop", ParamKind::Boolean, "enable/disable looping. Default: false")
        .body::<PlayerTheme>()
}

pub(super) fn endpoints() -> Vec<EndpointDescriptor> {
    vec![
        paginated(
            EndpointDescriptor::get("/players")
                .describe("List all players")
                .query("sortBy", ParamKind::String, "createdAt is the time the player was created. updatedAt is the time the player was last updated. The time is presented in ISO-8601 format.")
                .query("sortOrder", ParamKind::String, "Allowed: asc, desc. Ascending for date and time means that earlier values precede later ones."),
        )
        .returns::<Page<Player>>(),
        themed(EndpointDescriptor::post("/players").describe("Create a player")).returns::<Player>(),
        EndpointDescriptor::get("/players/{playerId}")
            .describe("Retrieve a player")
            .path_param("playerId", "The unique identifier for the player you want to retrieve.")
            .returns::<Player>(),
        themed(
            EndpointDescriptor::patch("/players/{playerId}")
                .describe("Update a player")
                .path_param("playerId", "The unique identifier for the player."),
        )
        .returns::<Player>(),
        EndpointDescriptor::delete("/players/{playerId}")
            .describe("Delete a player")
            .path_param("playerId", "The unique identifier for the player you want to delete."),
        EndpointDescriptor::delete("/players/{playerId}/logo")
            .describe("Delete logo")
            .path_param("playerId", "The unique identifier for the player."),
    ]
}
