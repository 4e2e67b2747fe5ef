use crate::descriptor::EndpointDescriptor;
use crate::models::{AccessToken, AuthenticatePayload, RefreshTokenPayload};
use crate::types::ParamKind;

pub(super) fn endpoints() -> Vec<EndpointDescriptor> {
    vec![
        EndpointDescriptor::post("/auth/api-key")
            .describe("Get Bearer Token")
            .required_field("apiKey", ParamKind::String, "Your account API key. You can use your sandbox API key, or you can use your production API key.")
            .body::<AuthenticatePayload>()
            .returns::<AccessToken>(),
        EndpointDescriptor::post("/auth/refresh")
            .describe("Refresh Bearer Token")
            .required_field("refreshToken", ParamKind::String, "The refresh token is either the first refresh token you received when you authenticated with the auth/api-key endpoint, or it's the refresh token from the last time you used the auth/refresh endpoint.")
            .body::<RefreshTokenPayload>()
            .returns::<AccessToken>(),
    ]
}
