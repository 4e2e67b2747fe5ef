use crate::descriptor::EndpointDescriptor;
use crate::models::Account;

pub(super) fn endpoints() -> Vec<EndpointDescriptor> {
    vec![EndpointDescriptor::get("/account")
        .describe("Show account")
        .returns::<Account>()]
}
