use leptos::prelude::*;
use leptos_meta::Title;

const FE_REPOSITORY: &str = "https://github.com/dewodt/Tubes2_FE_MCCF";
const BE_REPOSITORY: &str = "https://github.com/dewodt/Tubes2_BE_MCCF";

#[component]
pub fn About() -> impl IntoView {
	view! {
		<Title text="About | WikiRace" />
		<main class="page page-center">
			<section class="card">
				<h1>"About WikiRace"</h1>
				<p>
					"WikiRace is a game where players navigate from one Wikipedia page to another "
					"using only internal links. The search service solves it with breadth-first "
					"search and iterative-deepening search. The sources are available in the "
					<a href=FE_REPOSITORY target="_blank" rel="noopener noreferrer">
						"front-end repository"
					</a> " and the "
					<a href=BE_REPOSITORY target="_blank" rel="noopener noreferrer">
						"back-end repository"
					</a> "."
				</p>
			</section>
		</main>
	}
}
