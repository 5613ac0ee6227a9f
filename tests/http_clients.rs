use serde_json::json;
use sougi_core::application::error::ApplicationError;
use sougi_core::application::ports::{
    generator::TextGenerator, places::PlacesClient, romanizer::Romanizer,
};
use sougi_core::domain::place::{PhotoName, PlaceId};
use sougi_core::infrastructure::google::{GeminiClient, GooglePlacesClient};
use sougi_core::infrastructure::romanizer::HttpRomanizer;
use wiremock::matchers::{body_partial_json, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn place_json() -> serde_json::Value {
    json!({
        "id": "ChIJsakura0001",
        "displayName": { "text": "さくら会館", "languageCode": "ja" },
        "formattedAddress": "日本、〒177-0033 東京都練馬区谷原2丁目3-8",
        "location": { "latitude": 35.7485, "longitude": 139.6165 },
        "rating": 4.2,
        "userRatingCount": 37,
        "nationalPhoneNumber": "03-1234-5678",
        "regularOpeningHours": { "weekdayDescriptions": ["月曜日: 9時00分～17時00分"] },
        "photos": [{
            "name": "places/ChIJsakura0001/photos/AbC123",
            "widthPx": 1200,
            "heightPx": 800,
            "authorAttributions": [{ "displayName": "Taro" }]
        }],
        "reviews": [{
            "rating": 5,
            "text": { "text": "丁寧な対応でした" },
            "relativePublishTimeDescription": "1 か月前",
            "authorAttribution": { "displayName": "Hanako" }
        }]
    })
}

#[tokio::test]
async fn places_search_sends_key_mask_and_locale() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/places:searchText"))
        .and(header("X-Goog-Api-Key", "places-key"))
        .and(body_partial_json(json!({
            "textQuery": "練馬区 葬儀場",
            "languageCode": "ja",
            "regionCode": "JP",
            "maxResultCount": 20
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "places": [place_json()] })))
        .expect(1)
        .mount(&server)
        .await;

    let client = GooglePlacesClient::new(server.uri(), Some("places-key".into())).unwrap();
    let places = client.text_search("練馬区 葬儀場", 20).await.unwrap();

    assert_eq!(places.len(), 1);
    let place = &places[0];
    assert_eq!(place.name, "さくら会館");
    assert_eq!(place.user_rating_count, Some(37));
    assert_eq!(place.photos[0].attributions, vec!["Taro".to_string()]);
    assert_eq!(place.reviews[0].author.as_deref(), Some("Hanako"));
    assert_eq!(place.opening_hours.len(), 1);
}

#[tokio::test]
async fn places_search_with_no_results_is_empty() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/places:searchText"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .mount(&server)
        .await;

    let client = GooglePlacesClient::new(server.uri(), Some("k".into())).unwrap();
    assert!(client.text_search("どこにもない", 20).await.unwrap().is_empty());
}

#[tokio::test]
async fn place_details_not_found_is_upstream_404() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1/places/ChIJmissing"))
        .and(query_param("languageCode", "ja"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({
            "error": { "code": 404, "status": "NOT_FOUND" }
        })))
        .mount(&server)
        .await;

    let client = GooglePlacesClient::new(server.uri(), Some("k".into())).unwrap();
    let err = client
        .place_details(&PlaceId::new("ChIJmissing").unwrap())
        .await
        .unwrap_err();
    match err {
        ApplicationError::Upstream { status, message } => {
            assert_eq!(status, 404);
            assert!(message.starts_with("places:"), "{message}");
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[tokio::test]
async fn place_details_are_mapped() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1/places/ChIJsakura0001"))
        .respond_with(ResponseTemplate::new(200).set_body_json(place_json()))
        .mount(&server)
        .await;

    let client = GooglePlacesClient::new(server.uri(), Some("k".into())).unwrap();
    let place = client
        .place_details(&PlaceId::new("ChIJsakura0001").unwrap())
        .await
        .unwrap();
    assert_eq!(place.phone.as_deref(), Some("03-1234-5678"));
    assert!(place.location.is_some());
}

#[tokio::test]
async fn photo_keeps_upstream_content_type() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1/places/ChIJsakura0001/photos/AbC123/media"))
        .and(query_param("maxWidthPx", "400"))
        .respond_with(ResponseTemplate::new(200).set_body_raw(b"RIFFwebp".to_vec(), "image/webp"))
        .mount(&server)
        .await;

    let client = GooglePlacesClient::new(server.uri(), Some("k".into())).unwrap();
    let name = PhotoName::new("places/ChIJsakura0001/photos/AbC123").unwrap();
    let media = client.photo(&name, 400).await.unwrap();
    assert_eq!(media.content_type, "image/webp");
    assert_eq!(&media.bytes[..], b"RIFFwebp");
}

#[tokio::test]
async fn missing_places_key_fails_without_request() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let client = GooglePlacesClient::new(server.uri(), None).unwrap();
    let err = client.text_search("練馬区", 20).await.unwrap_err();
    assert!(matches!(err, ApplicationError::Configuration(_)));
}

#[tokio::test]
async fn gemini_requests_search_grounding_and_joins_parts() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1beta/models/test-model:generateContent"))
        .and(header("x-goog-api-key", "gemini-key"))
        .and(body_partial_json(json!({ "tools": [{ "google_search": {} }] })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "candidates": [{
                "content": { "parts": [{ "text": "さくら会館は" }, { "text": "練馬区の斎場です。" }] }
            }]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = GeminiClient::new(server.uri(), "test-model", Some("gemini-key".into())).unwrap();
    let text = client.generate("prompt").await.unwrap();
    assert_eq!(text, "さくら会館は練馬区の斎場です。");
    assert_eq!(client.model(), "test-model");
}

#[tokio::test]
async fn gemini_blocked_prompt_is_generation_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "promptFeedback": { "blockReason": "SAFETY" }
        })))
        .mount(&server)
        .await;

    let client = GeminiClient::new(server.uri(), "test-model", Some("k".into())).unwrap();
    let err = client.generate("prompt").await.unwrap_err();
    assert!(matches!(err, ApplicationError::Generation(ref msg) if msg.contains("SAFETY")));
}

#[tokio::test]
async fn gemini_without_candidates_returns_empty_text() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "candidates": [] })))
        .mount(&server)
        .await;

    let client = GeminiClient::new(server.uri(), "test-model", Some("k".into())).unwrap();
    assert_eq!(client.generate("prompt").await.unwrap(), "");
}

#[tokio::test]
async fn gemini_server_error_carries_status() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(503).set_body_string("overloaded"))
        .mount(&server)
        .await;

    let client = GeminiClient::new(server.uri(), "test-model", Some("k".into())).unwrap();
    let err = client.generate("prompt").await.unwrap_err();
    assert!(matches!(err, ApplicationError::Upstream { status: 503, .. }));
}

#[tokio::test]
async fn missing_gemini_key_is_configuration_error() {
    let client = GeminiClient::new("http://127.0.0.1:9", "test-model", None).unwrap();
    let err = client.generate("prompt").await.unwrap_err();
    assert!(matches!(err, ApplicationError::Configuration(_)));
}

#[tokio::test]
async fn romanizer_posts_text_and_reads_romaji() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/romanize"))
        .and(body_partial_json(json!({ "text": "練馬" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "romaji": "nerima" })))
        .mount(&server)
        .await;

    let romanizer = HttpRomanizer::new(format!("{}/romanize", server.uri())).unwrap();
    assert_eq!(romanizer.romanize("練馬").await.unwrap(), "nerima");
}

#[tokio::test]
async fn romanizer_error_status_is_reported() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let romanizer = HttpRomanizer::new(server.uri()).unwrap();
    assert!(romanizer.romanize("練馬").await.is_err());
}
