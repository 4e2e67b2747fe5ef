use super::paginated;
use crate::descriptor::EndpointDescriptor;
use crate::models::{Page, TokenCreationPayload, UploadToken};
use crate::types::ParamKind;

pub(super) fn endpoints() -> Vec<EndpointDescriptor> {
    vec![
        paginated(
            EndpointDescriptor::get("/upload-tokens")
                .describe("List all active upload tokens.")
                .query("sortBy", ParamKind::String, "Allowed: createdAt, ttl. Sort by when a token was created, or how much longer the token will be active.")
                .query("sortOrder", ParamKind::String, "Allowed: asc, desc. Ascending is 0-9 or A-Z. Descending is 9-0 or Z-A."),
        )
        .returns::<Page<UploadToken>>(),
        EndpointDescriptor::post("/upload-tokens")
            .describe("Generate an upload token")
            .field("ttl", ParamKind::Number, "Time in seconds that the token will be active. A value of 0 means that the token has no expiration date.")
            .body::<TokenCreationPayload>()
            .returns::<UploadToken>(),
        EndpointDescriptor::get("/upload-tokens/{uploadToken}")
            .describe("Retrieve upload token")
            .path_param("uploadToken", "The unique identifier for the token you want information about.")
            .returns::<UploadToken>(),
        EndpointDescriptor::delete("/upload-tokens/{uploadToken}")
            .describe("Delete an upload token")
            .path_param("uploadToken", "The unique identifier for the upload token you want to delete. A deleted token can no longer be used for authentication."),
    ]
}
