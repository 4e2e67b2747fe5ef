use super::paginated;
use crate::descriptor::EndpointDescriptor;
use crate::models::{Chapter, Page};

const LANGUAGE: &str = "A valid BCP 47 language representation.";

pub(super) fn endpoints() -> Vec<EndpointDescriptor> {
    vec![
        paginated(
            EndpointDescriptor::get("/videos/{videoId}/chapters")
                .describe("List video chapters")
                .path_param("videoId", "The unique identifier for the video you want to retrieve a list of chapters for."),
        )
        .returns::<Page<Chapter>>(),
        EndpointDescriptor::get("/videos/{videoId}/chapters/{language}")
            .describe("Show a chapter")
            .path_param("videoId", "The unique identifier for the video you want to show a chapter for.")
            .path_param("language", LANGUAGE)
            .returns::<Chapter>(),
        EndpointDescriptor::delete("/videos/{videoId}/chapters/{language}")
            .describe("Delete a chapter")
            .path_param("videoId", "The unique identifier for the video you want to delete a chapter from.")
            .path_param("language", LANGUAGE),
    ]
}
