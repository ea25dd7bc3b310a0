#![cfg(not(target_arch = "wasm32"))]

use serde_json::json;
use wikirace::api::{
	Algorithm, FormField, HttpPathSearch, PathSearch, PathSolutionOption, PlayRequest,
	WikipediaClient,
};
use wikirace::config::AppConfig;
use wikirace::error::ApiError;
use wiremock::matchers::{body_string_contains, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn request() -> PlayRequest {
	PlayRequest {
		algorithm: Algorithm::Bfs,
		path_solution_option: PathSolutionOption::Multiple,
		start: "Cars (film)".into(),
		target: "Cars (franchise)".into(),
	}
}

fn config_for(server: &MockServer) -> AppConfig {
	AppConfig::with_endpoints(server.uri(), format!("{}/w/api.php", server.uri()))
}

#[tokio::test]
async fn play_posts_form_and_decodes_result() -> Result<(), Box<dyn std::error::Error>> {
	let server = MockServer::start().await;
	Mock::given(method("POST"))
		.and(path("/play"))
		.and(body_string_contains("algorithm=BFS"))
		.and(body_string_contains("pathSolutionOption=multiple"))
		.and(body_string_contains("start=Cars+%28film%29"))
		.respond_with(ResponseTemplate::new(200).set_body_json(json!({
			"totalTraversed": 500,
			"shortestPathLength": 4,
			"duration": 5.73,
			"articles": [
				{"id": 0, "title": "Cars (film)", "description": "", "thumbnail": "", "url": "https://en.wikipedia.org/wiki/Cars_(film)"},
				{"id": 1, "title": "Cars 2", "description": "", "thumbnail": "", "url": "https://en.wikipedia.org/wiki/Cars_2"},
				{"id": 2, "title": "Cars 3", "description": "", "thumbnail": "", "url": "https://en.wikipedia.org/wiki/Cars_3"},
				{"id": 3, "title": "Cars (franchise)", "description": "", "thumbnail": "", "url": "https://en.wikipedia.org/wiki/Cars_(franchise)"}
			],
			"paths": [[0, 1, 2, 3]]
		})))
		.expect(1)
		.mount(&server)
		.await;

	let search = HttpPathSearch::new(config_for(&server));
	let result = search.play(&request()).await?;

	assert_eq!(result.total_traversed, 500);
	assert_eq!(result.paths, vec![vec![0, 1, 2, 3]]);
	assert_eq!(result.articles[3].title, "Cars (franchise)");
	Ok(())
}

#[tokio::test]
async fn play_surfaces_backend_field_errors() {
	let server = MockServer::start().await;
	Mock::given(method("POST"))
		.and(path("/play"))
		.respond_with(ResponseTemplate::new(400).set_body_json(json!({
			"error": "Bad Request",
			"message": "Target page not found",
			"errorFields": [{"field": "target", "message": "not found"}]
		})))
		.mount(&server)
		.await;

	let search = HttpPathSearch::new(config_for(&server));
	match search.play(&request()).await {
		Err(ApiError::Backend {
			error,
			message,
			fields,
		}) => {
			assert_eq!(error, "Bad Request");
			assert_eq!(message, "Target page not found");
			assert_eq!(fields.len(), 1);
			assert_eq!(fields[0].field, FormField::Target);
		}
		other => panic!("expected backend error, got {:?}", other),
	}
}

#[tokio::test]
async fn play_reports_unreachable_backend_as_network_error() {
	// Nothing listens on port 1.
	let config = AppConfig::with_endpoints("http://127.0.0.1:1", "http://127.0.0.1:1/w/api.php");
	let search = HttpPathSearch::new(config);
	assert!(matches!(
		search.play(&request()).await,
		Err(ApiError::Network(_))
	));
}

#[tokio::test]
async fn suggestions_are_fetched_with_prefix_search() -> Result<(), Box<dyn std::error::Error>> {
	let server = MockServer::start().await;
	Mock::given(method("GET"))
		.and(path("/w/api.php"))
		.and(query_param("generator", "prefixsearch"))
		.and(query_param("gpssearch", "Cars"))
		.and(query_param("gpslimit", "5"))
		.respond_with(ResponseTemplate::new(200).set_body_json(json!({
			"batchcomplete": "",
			"query": {
				"pages": {
					"41": {"pageid": 41, "ns": 0, "title": "Cars 2", "index": 2},
					"7": {
						"pageid": 7, "ns": 0, "title": "Cars", "index": 1,
						"thumbnail": {"source": "https://upload.wikimedia.org/cars.png", "width": 160, "height": 120},
						"terms": {"description": ["2006 film"]}
					}
				}
			}
		})))
		.expect(1)
		.mount(&server)
		.await;

	let client = WikipediaClient::new(&config_for(&server));
	let recs = client.search("Cars").await?;

	assert_eq!(recs.len(), 2);
	assert_eq!(recs[0].title, "Cars");
	assert_eq!(recs[0].description, "2006 film");
	assert_eq!(recs[1].thumbnail, "");
	Ok(())
}

#[tokio::test]
async fn suggestion_server_error_is_an_error() {
	let server = MockServer::start().await;
	Mock::given(method("GET"))
		.and(path("/w/api.php"))
		.respond_with(ResponseTemplate::new(503))
		.mount(&server)
		.await;

	let client = WikipediaClient::new(&config_for(&server));
	assert!(matches!(
		client.search("Cars").await,
		Err(ApiError::Status(503))
	));
}
