// tests/support/builders.rs
use sougi_core::domain::place::{GeoPoint, PhotoRef, Place};

pub const SAKURA_ID: &str = "ChIJsakura0001";
pub const MIDORI_ID: &str = "ChIJmidori0002";

pub fn place(id: &str, name: &str, address: &str) -> Place {
    Place {
        id: id.into(),
        name: name.into(),
        address: Some(address.into()),
        location: Some(GeoPoint {
            lat: 35.7485,
            lng: 139.6165,
        }),
        rating: Some(4.2),
        user_rating_count: Some(37),
        phone: Some("03-1234-5678".into()),
        website: None,
        google_maps_uri: None,
        opening_hours: vec![],
        photos: vec![PhotoRef {
            name: format!("places/{id}/photos/AbC123"),
            width: Some(1200),
            height: Some(800),
            attributions: vec![],
        }],
        reviews: vec![],
    }
}

pub fn sample_places() -> Vec<Place> {
    vec![
        place(SAKURA_ID, "さくら会館", "東京都練馬区谷原2丁目3-8"),
        place(MIDORI_ID, "みどり斎場", "東京都練馬区高野台1丁目1-1"),
    ]
}

/// Generated text that passes the quality checks: Japanese overview plus a
/// structured section for `name`.
pub fn good_description(name: &str) -> String {
    format!(
        "{name}は練馬区谷原にある家族葬向けの葬儀場です。駅から徒歩五分の立地で、\
小規模な家族葬から一般葬まで対応しており、控室や駐車場も完備しています。\
スタッフの対応が丁寧だと評判で、初めての方でも安心して相談できます。[1]\n\n\
### {name}\n\
- **住所**: 東京都練馬区谷原2丁目3-8\n\
- 電話番号: 03-1234-5678\n\
- 評価: 4.2\n\
- 口コミ数: 37\n\
- 口コミ:\n\
  - 式場が清潔でした\n\
- よくある質問:\n\
Q: 駐車場はありますか？\n\
A: 10台分あります。\n"
    )
}
