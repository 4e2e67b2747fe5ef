use super::paginated;
use crate::descriptor::EndpointDescriptor;
use crate::models::{
    Page, Video, VideoCreationPayload, VideoStatus, VideoThumbnailPickPayload, VideoUpdatePayload,
};
use crate::types::ParamKind;

pub(super) fn endpoints() -> Vec<EndpointDescriptor> {
    vec![
        paginated(
            EndpointDescriptor::get("/videos")
                .describe("List all videos")
                .query("title", ParamKind::String, "The title of a specific video you want to find. The search will match exactly to what term you provide and return any videos that contain the same term as part of their titles.")
                .query("tags", ParamKind::Array, "A tag is a category you create and apply to videos. You can search for videos with particular tags by listing one or more here. Only videos that have all the tags you list will be returned.")
                .query("metadata", ParamKind::Array, "Videos can be tagged with metadata tags in key:value pairs. You can search for videos with specific key value pairs using this parameter.")
                .query("description", ParamKind::String, "If you described a video with a term or sentence, you can add it here to return videos containing this string.")
                .query("liveStreamId", ParamKind::String, "If you know the ID for a live stream, you can retrieve the stream by adding the ID for it here.")
                .query("sortBy", ParamKind::String, "Allowed: publishedAt, title. You can search by the time videos were published at, or by title.")
                .query("sortOrder", ParamKind::String, "Allowed: asc, desc. asc is ascending and sorts from A to Z. desc is descending and sorts from Z to A."),
        )
        .returns::<Page<Video>>(),
        EndpointDescriptor::post("/videos")
            .describe("Create a video")
            .required_field("title", ParamKind::String, "The title of your new video.")
            .field("description", ParamKind::String, "A brief description of your video.")
            .field("source", ParamKind::String, "If you add a video already on the web, this is where you enter the url for the video.")
            .field("public", ParamKind::Boolean, "Whether your video can be viewed by everyone, or requires authentication to see it. A setting of false will require a unique token for each view. Default is true.")
            .field("panoramic", ParamKind::Boolean, "Indicates if your video is a 360/immersive video.")
            .field("mp4Support", ParamKind::Boolean, "Enables mp4 version in addition to streamed version.")
            .field("playerId", ParamKind::String, "The unique identification number for your video player.")
            .field("tags", ParamKind::Array, "A list of tags you want to use to describe your video.")
            .field("metadata", ParamKind::Array, "A list of key value pairs that you use to provide metadata for your video.")
            .field("publishedAt", ParamKind::String, "The API uses ISO-8601 format for time, and includes 3 places for milliseconds.")
            .body::<VideoCreationPayload>()
            .returns::<Video>(),
        EndpointDescriptor::get("/videos/{videoId}")
            .describe("Retrieve a video object")
            .path_param("videoId", "The unique identifier for the video you want details about.")
            .returns::<Video>(),
        EndpointDescriptor::patch("/videos/{videoId}")
            .describe("Update a video")
            .path_param("videoId", "The video ID for the video you want to update.")
            .field("title", ParamKind::String, "The title you want to use for your video.")
            .field("description", ParamKind::String, "A brief description of the video.")
            .field("playerId", ParamKind::String, "The unique ID for the player you want to associate with your video.")
            .field("public", ParamKind::Boolean, "Whether the video is publicly available or not. False means it is set to private. Default is true.")
            .field("panoramic", ParamKind::Boolean, "Whether the video is a 360 degree or immersive video.")
            .field("mp4Support", ParamKind::Boolean, "Whether the player supports the mp4 format.")
            .field("tags", ParamKind::Array, "A list of terms or words you want to tag the video with. Whatever you send in this list will overwrite the existing list for the video.")
            .field("metadata", ParamKind::Array, "A list of key value pairs that describes the video. Whatever you send here will overwrite the existing metadata for the video.")
            .body::<VideoUpdatePayload>()
            .returns::<Video>(),
        EndpointDescriptor::delete("/videos/{videoId}")
            .describe("Delete a video")
            .path_param("videoId", "The video ID for the video you want to delete."),
        EndpointDescriptor::get("/videos/{videoId}/status")
            .describe("Retrieve video status and details")
            .path_param("videoId", "The unique identifier for the video you want the status for.")
            .returns::<VideoStatus>(),
        EndpointDescriptor::patch("/videos/{videoId}/thumbnail")
            .describe("Pick a thumbnail")
            .path_param("videoId", "Unique identifier of the video you want to add a thumbnail to, where you use a section of your video as the thumbnail.")
            .required_field("timecode", ParamKind::String, "Frame in video to be used as a placeholder before the video plays, for example \"00:01:00.000\" for 1 minute into the video. Valid patterns: \"hh:mm:ss.ms\", \"hh:mm:ss:frameNumber\", \"124\" (seconds).")
            .body::<VideoThumbnailPickPayload>()
            .returns::<Video>(),
    ]
}
