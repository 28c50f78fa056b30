//! ブラウザでのファイルダウンロード
//!
//! Blob + オブジェクトURL + 一時的な <a download> で保存させる。

use tshirt_niche_common::{to_csv_string, Analysis, Error, EXPORT_FILE_NAME};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Blob, BlobPropertyBag, HtmlAnchorElement, Url};

const CSV_MIME: &str = "text/csv;charset=utf-8;";

fn js_err(context: &str, e: JsValue) -> String {
    format!("{}: {:?}", context, e)
}

/// ダウンロードするCSV本文（除外されなかった全行、スコア降順）
pub fn csv_payload(analysis: Option<&Analysis>) -> Result<String, String> {
    let analysis = analysis.ok_or_else(|| Error::EmptyExport.to_string())?;
    to_csv_string(analysis.headers(), analysis.scored()).map_err(|e| e.to_string())
}

/// 文字列をファイルとしてダウンロードさせる
pub fn trigger_download(content: &str, file_name: &str, mime: &str) -> Result<(), String> {
    let parts = js_sys::Array::new();
    parts.push(&JsValue::from_str(content));

    let options = BlobPropertyBag::new();
    options.set_type(mime);
    let blob = Blob::new_with_str_sequence_and_options(&parts, &options)
        .map_err(|e| js_err("Blob生成エラー", e))?;
    let url = Url::create_object_url_with_blob(&blob).map_err(|e| js_err("URL生成エラー", e))?;

    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| "documentが取得できません".to_string())?;
    let anchor: HtmlAnchorElement = document
        .create_element("a")
        .map_err(|e| js_err("要素生成エラー", e))?
        .dyn_into()
        .map_err(|_| "アンカー要素への変換に失敗".to_string())?;

    anchor.set_href(&url);
    anchor.set_download(file_name);
    anchor.click();

    Url::revoke_object_url(&url).map_err(|e| js_err("URL解放エラー", e))
}

/// 解析結果CSVをダウンロード
pub fn download_results(analysis: Option<&Analysis>) -> Result<(), String> {
    let content = csv_payload(analysis)?;
    trigger_download(&content, EXPORT_FILE_NAME, CSV_MIME)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tshirt_niche_common::{analyze, parse_str};

    const EMPTY_MESSAGE: &str = "No data to download. Please analyze some data first.";

    #[test]
    fn test_payload_without_analysis() {
        assert_eq!(csv_payload(None), Err(EMPTY_MESSAGE.to_string()));
    }

    #[test]
    fn test_payload_all_blocked() {
        let dataset = parse_str("title\nOfficial Disney Shirt\n").expect("CSV解析失敗");
        let analysis = analyze(&dataset);
        assert_eq!(csv_payload(Some(&analysis)), Err(EMPTY_MESSAGE.to_string()));
    }

    #[test]
    fn test_payload_contents() {
        let dataset = parse_str("title,bsr\nFunny Dad Fishing Shirt,800\nPlain Crewneck,\n").expect("CSV解析失敗");
        let analysis = analyze(&dataset);
        let csv = csv_payload(Some(&analysis)).expect("CSV生成失敗");

        let mut lines = csv.lines();
        assert_eq!(lines.next(), Some("title,bsr,winning_score,niche_category"));
        assert_eq!(lines.next(), Some("Funny Dad Fishing Shirt,800,104,hobbies"));
        assert_eq!(lines.next(), Some("Plain Crewneck,,0,general"));
    }
}
