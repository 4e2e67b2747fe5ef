use super::paginated;
use crate::descriptor::EndpointDescriptor;
use crate::models::{Page, Webhook, WebhookCreationPayload};
use crate::types::ParamKind;

pub(super) fn endpoints() -> Vec<EndpointDescriptor> {
    vec![
        paginated(
            EndpointDescriptor::get("/webhooks")
                .describe("List all webhooks")
                .query("events", ParamKind::String, "The webhook event that you wish to filter on."),
        )
        .returns::<Page<Webhook>>(),
        EndpointDescriptor::post("/webhooks")
            .describe("Create Webhook")
            .required_field("events", ParamKind::Array, "A list of the webhook events you are subscribing to, such as video.encoding.quality.completed, live-stream.broadcast.started, live-stream.broadcast.ended or video.source.recorded.")
            .required_field("url", ParamKind::String, "The URL to which HTTP notifications are sent. It could be any http or https URL.")
            .body::<WebhookCreationPayload>()
            .returns::<Webhook>(),
        EndpointDescriptor::get("/webhooks/{webhookId}")
            .describe("Retrieve Webhook details")
            .path_param("webhookId", "The unique webhook you wish to retreive details on.")
            .returns::<Webhook>(),
        EndpointDescriptor::delete("/webhooks/{webhookId}")
            .describe("Delete a Webhook")
            .path_param("webhookId", "The webhook you wish to delete."),
    ]
}
