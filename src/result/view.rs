use leptos::prelude::*;

use super::graph_data::get_graph_data;
use super::legend::legend_entries;
use super::summary::ResultSummary;
use crate::api::{Article, ResultResponse};
use crate::components::force_graph::ForceGraphCanvas;
use crate::components::thumbnail::Thumbnail;
use crate::theme::Theme;

#[component]
fn ArticleLink(article: Article) -> impl IntoView {
	view! {
		<a class="result-link" href=article.url target="_blank" rel="noopener noreferrer">
			{article.title}
		</a>
	}
}

#[component]
pub fn ResultMessage(summary: ResultSummary) -> impl IntoView {
	view! {
		<p class="result-message" aria-label=summary.sentence()>
			"Found " <span class="highlight">{summary.solutions_text()}</span>
			" after traversing " <span class="highlight">{summary.traversed_text()}</span> " in "
			<span class="highlight">{format!("{} seconds", summary.duration)}</span>
			". The shortest path from " <ArticleLink article=summary.start.clone() /> " to "
			<ArticleLink article=summary.target.clone() /> " takes "
			<span class="highlight">{summary.hops_text()}</span> "."
		</p>
	}
}

/// Force graph of every path with a degree legend on top.
#[component]
pub fn ResultGraph(result: ResultResponse, #[prop(into)] theme: Signal<Theme>) -> impl IntoView {
	let data = get_graph_data(&result.articles, &result.paths);
	let legend = legend_entries(&result.paths);

	view! {
		<div class="result-graph">
			<ForceGraphCanvas data=Signal::derive(move || data.clone()) theme=theme height=600.0 />
			<ul class="legend">
				{legend
					.into_iter()
					.map(|(label, color)| {
						view! {
							<li>
								<span class="legend-dot" style:background-color=color></span>
								<span>{label}</span>
							</li>
						}
					})
					.collect_view()}
			</ul>
		</div>
	}
}

/// One solution path as a list of article cards.
#[component]
pub fn ResultList(articles: Vec<Article>) -> impl IntoView {
	view! {
		<ol class="result-list">
			{articles
				.into_iter()
				.map(|article| {
					view! {
						<li>
							<a
								class="entry"
								href=article.url.clone()
								target="_blank"
								rel="noopener noreferrer"
							>
								<Thumbnail src=article.thumbnail.clone() alt=article.title.clone() />
								<div class="entry-text">
									<p class="entry-title">{article.title}</p>
									<p class="entry-description">{article.description}</p>
								</div>
							</a>
						</li>
					}
				})
				.collect_view()}
		</ol>
	}
}

/// Message, graph and per-path lists for one search result.
#[component]
pub fn ResultSection(result: ResultResponse, #[prop(into)] theme: Signal<Theme>) -> impl IntoView {
	let summary = ResultSummary::from_response(&result);
	let lists: Vec<Vec<Article>> = result.paths.iter().map(|p| result.path_articles(p)).collect();

	view! {
		<section class="results">
			<div class="result-block">
				<h2>"Information"</h2>
				{summary.map(|summary| view! { <ResultMessage summary=summary /> })}
			</div>
			<div class="result-block">
				<h2>"Graph Visualization"</h2>
				<ResultGraph result=result theme=theme />
			</div>
			<div class="result-block">
				<h2>"Individual Paths"</h2>
				<div class="result-lists">
					{lists.into_iter().map(|articles| view! { <ResultList articles=articles /> }).collect_view()}
				</div>
			</div>
		</section>
	}
}
