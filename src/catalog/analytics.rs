use super::paginated;
use crate::descriptor::EndpointDescriptor;
use crate::models::{Page, PlayerSession, PlayerSessionEvent};
use crate::types::ParamKind;

const PERIOD: &str = "Period must have one of the following formats: a day (2018-01-01), a week (2018-W01), a month (2018-01), a year (2018), or a date range (2018-01-01/2018-01-15).";

pub(super) fn endpoints() -> Vec<EndpointDescriptor> {
    vec![
        paginated(
            EndpointDescriptor::get("/analytics/videos/{videoId}")
                .describe("List video player sessions")
                .path_param("videoId", "The unique identifier for the video you want to retrieve session information for.")
                .query("period", ParamKind::String, PERIOD)
                .query("metadata", ParamKind::Array, "Metadata and dynamic metadata filter. Send an array of key value pairs you want to filter sessions with."),
        )
        .returns::<Page<PlayerSession>>(),
        paginated(
            EndpointDescriptor::get("/analytics/live-streams/{liveStreamId}")
                .describe("List live stream player sessions")
                .path_param("liveStreamId", "The unique identifier for the live stream you want to retrieve analytics for.")
                .query("period", ParamKind::String, PERIOD),
        )
        .returns::<Page<PlayerSession>>(),
        paginated(
            EndpointDescriptor::get("/analytics/sessions/{sessionId}/events")
                .describe("List player session events")
                .path_param("sessionId", "A unique identifier you can use to reference and track a session with."),
        )
        .returns::<Page<PlayerSessionEvent>>(),
    ]
}
