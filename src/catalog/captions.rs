use super::paginated;
use crate::descriptor::EndpointDescriptor;
use crate::models::{Caption, CaptionsUpdatePayload, Page};
use crate::types::ParamKind;

const LANGUAGE: &str = "A valid BCP 47 language representation.";

pub(super) fn endpoints() -> Vec<EndpointDescriptor> {
    vec![
        paginated(
            EndpointDescriptor::get("/videos/{videoId}/captions")
                .describe("List video captions")
                .path_param("videoId", "The unique identifier for the video you want to retrieve a list of captions for."),
        )
        .returns::<Page<Caption>>(),
        EndpointDescriptor::get("/videos/{videoId}/captions/{language}")
            .describe("Retrieve a caption")
            .path_param("videoId", "The unique identifier for the video you want captions for.")
            .path_param("language", LANGUAGE)
            .returns::<Caption>(),
        EndpointDescriptor::patch("/videos/{videoId}/captions/{language}")
            .describe("Update a caption")
            .path_param("videoId", "The unique identifier for the video you want to have automatic captions for.")
            .path_param("language", LANGUAGE)
            .field("default", ParamKind::Boolean, "Whether this caption track is shown by default.")
            .body::<CaptionsUpdatePayload>()
            .returns::<Caption>(),
        EndpointDescriptor::delete("/videos/{videoId}/captions/{language}")
            .describe("Delete a caption")
            .path_param("videoId", "The unique identifier for the video you want to delete a caption from.")
            .path_param("language", LANGUAGE),
    ]
}
