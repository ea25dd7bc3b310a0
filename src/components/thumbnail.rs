use leptos::prelude::*;

/// Square article preview, with a document glyph when there is no image or it fails to load.
#[component]
pub fn Thumbnail(#[prop(into)] src: String, #[prop(into)] alt: String) -> impl IntoView {
	let failed = RwSignal::new(src.is_empty());

	view! {
		<div class="thumbnail">
			<Show
				when=move || !failed.get()
				fallback=|| view! { <span class="thumbnail-fallback" aria-hidden="true">"🗎"</span> }
			>
				<img
					src=src.clone()
					alt=alt.clone()
					width="50"
					height="50"
					loading="lazy"
					on:error=move |_| failed.set(true)
				/>
			</Show>
		</div>
	}
}
