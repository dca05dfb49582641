use crate::components::content_band::{BandVariant, ContentBand};
use crate::components::gallery::Gallery;
use cpbra_site::MediaItem;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct GalleryPageProps {
    #[prop_or_default]
    pub media: Option<Vec<MediaItem>>,
}

#[function_component(GalleryPage)]
pub fn gallery_page(props: &GalleryPageProps) -> Html {
    html! {
        <ContentBand variant={BandVariant::Dark} id={Some(AttrValue::from("gallery"))}>
            <Gallery media={props.media.clone()} />
        </ContentBand>
    }
}
