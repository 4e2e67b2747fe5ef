use super::paginated;
use crate::descriptor::EndpointDescriptor;
use crate::models::{LiveStream, LiveStreamCreationPayload, LiveStreamUpdatePayload, Page};
use crate::types::ParamKind;

const PUBLIC: &str = "Whether your live stream can be viewed by everyone, or requires authentication to see it. A setting of false will require a unique token for each view. Please limit private live streams to 3,000 users.";

pub(super) fn endpoints() -> Vec<EndpointDescriptor> {
    vec![
        paginated(
            EndpointDescriptor::get("/live-streams")
                .describe("List all live streams")
                .query("streamKey", ParamKind::String, "The unique stream key that allows you to stream videos.")
                .query("name", ParamKind::String, "You can filter live streams by their name or a part of their name.")
                .query("sortBy", ParamKind::String, "Allowed: createdAt, publishedAt, name. Time based options are presented in ISO-8601 format.")
                .query("sortOrder", ParamKind::String, "Allowed: asc, desc. Ascending for date and time means that earlier values precede later ones."),
        )
        .returns::<Page<LiveStream>>(),
        EndpointDescriptor::post("/live-streams")
            .describe("Create live stream")
            .required_field("name", ParamKind::String, "Add a name for your live stream here.")
            .field("record", ParamKind::Boolean, "Whether you are recording or not. True for record, false for not record.")
            .field("public", ParamKind::Boolean, PUBLIC)
            .field("playerId", ParamKind::String, "The unique identifier for the player.")
            .body::<LiveStreamCreationPayload>()
            .returns::<LiveStream>(),
        EndpointDescriptor::get("/live-streams/{liveStreamId}")
            .describe("Retrieve live stream")
            .path_param("liveStreamId", "The unique ID for the live stream you want to watch.")
            .returns::<LiveStream>(),
        EndpointDescriptor::patch("/live-streams/{liveStreamId}")
            .describe("Update a live stream")
            .path_param("liveStreamId", "The unique ID for the live stream that you want to update information for such as player details, or whether you want the recording on or off.")
            .field("name", ParamKind::String, "The name you want to use for your live stream.")
            .field("record", ParamKind::Boolean, "Use this to indicate whether you want the recording on or off. On is true, off is false.")
            .field("public", ParamKind::Boolean, PUBLIC)
            .field("playerId", ParamKind::String, "The unique ID for the player associated with a live stream that you want to update.")
            .body::<LiveStreamUpdatePayload>()
            .returns::<LiveStream>(),
        EndpointDescriptor::delete("/live-streams/{liveStreamId}")
            .describe("Delete a live stream")
            .path_param("liveStreamId", "The unique ID for the live stream that you want to remove."),
        EndpointDescriptor::delete("/live-streams/{liveStreamId}/thumbnail")
            .describe("Delete a thumbnail")
            .path_param("liveStreamId", "The unique identifier of the live stream whose thumbnail you want to delete.")
            .returns::<LiveStream>(),
    ]
}
