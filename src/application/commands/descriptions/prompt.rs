use crate::application::dto::PlaceDetailDto;

/// Prompt asking for a Japanese overview followed by one structured
/// `### {name}` section the markdown parser understands.
pub(super) fn description_prompt(place: &PlaceDetailDto) -> String {
    let mut facts = format!("施設名: {}\n", place.name);
    if let Some(address) = &place.address {
        facts.push_str(&format!("住所: {address}\n"));
    }
    if let Some(phone) = &place.phone {
        facts.push_str(&format!("電話番号: {phone}\n"));
    }
    if let Some(rating) = place.rating {
        facts.push_str(&format!("評価: {rating:.1}\n"));
    }
    if let Some(count) = place.user_rating_count {
        facts.push_str(&format!("口コミ数: {count}\n"));
    }
    if let Some(website) = &place.website {
        facts.push_str(&format!("ウェブサイト: {website}\n"));
    }

    format!(
        "あなたは葬儀場の案内文を書く編集者です。以下の施設についてウェブ検索で最新の情報を確認し、\
日本語で回答してください。\n\n\
{facts}\n\
出力形式:\n\
1. 最初に施設の特徴、設備、アクセスを200〜400文字の段落で紹介してください。\n\
2. 続けて「### {name}」という見出しを書き、その下に次の項目を記載してください。\n\
- 住所: …\n\
- 電話番号: …\n\
- 評価: 5点満点の数値\n\
- 口コミ数: 件数\n\
- 口コミ: 箇条書きで最大3件の要約\n\
- よくある質問: 「Q: …」と「A: …」の行を交互に最大3組\n\
- オーナーからのメッセージ: 箇条書き（なければ省略）\n\n\
確認できない情報は推測せず省略してください。",
        name = place.name,
    )
}
