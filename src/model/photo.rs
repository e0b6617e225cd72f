use serde::{Deserialize, Serialize};

/// One photo record as served by the Mars photos endpoint.
///
/// The wire payload names the image field `img_src`; it is bound to
/// `image_url` here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MarsPhoto {
    pub id: String,
    #[serde(rename = "img_src")]
    pub image_url: String,
}
