//! アップロードエリアコンポーネント
//!
//! クリック選択・ドラッグ&ドロップでCSVを受け取り、テキストとして読み込む。

use gloo::dialogs::alert;
use leptos::prelude::*;
use tshirt_niche_common::ensure_csv_name;
use wasm_bindgen::prelude::*;
use web_sys::{DragEvent, File, FileList, FileReader, HtmlInputElement, MouseEvent};

pub const READ_ERROR_MESSAGE: &str = "Error reading CSV file. Please check the file format.";

#[component]
pub fn UploadArea<F>(is_loading: ReadSignal<bool>, on_csv_loaded: F) -> impl IntoView
where
    F: Fn(String) + 'static + Clone,
{
    let (is_dragover, set_is_dragover) = signal(false);
    let input_ref: NodeRef<leptos::html::Input> = NodeRef::new();

    // 複数ファイルが来ても先頭の1件だけ扱う
    let handle_files = {
        let on_csv_loaded = on_csv_loaded.clone();
        move |files: FileList| {
            if let Some(file) = files.get(0) {
                handle_file(file, on_csv_loaded.clone());
            }
        }
    };

    let on_drop = {
        let handle_files = handle_files.clone();
        move |ev: DragEvent| {
            ev.prevent_default();
            set_is_dragover.set(false);

            if is_loading.get_untracked() {
                return;
            }

            if let Some(files) = ev.data_transfer().and_then(|dt| dt.files()) {
                handle_files(files);
            }
        }
    };

    let on_dragover = move |ev: DragEvent| {
        ev.prevent_default();
        set_is_dragover.set(true);
    };

    let on_dragleave = move |_: DragEvent| {
        set_is_dragover.set(false);
    };

    let on_click = move |_| {
        if is_loading.get_untracked() {
            return;
        }
        if let Some(input) = input_ref.get() {
            input.click();
        }
    };

    let on_change = {
        let handle_files = handle_files.clone();
        move |ev: web_sys::Event| {
            let input: HtmlInputElement = event_target(&ev);
            if let Some(files) = input.files() {
                handle_files(files);
            }
            // 同じファイルを再選択しても change が発火するように
            input.set_value("");
        }
    };

    view! {
        <div
            class=move || {
                let mut classes = vec!["upload-area"];
                if is_dragover.get() {
                    classes.push("dragover");
                }
                if is_loading.get() {
                    classes.push("disabled");
                }
                classes.join(" ")
            }
            on:drop=on_drop
            on:dragover=on_dragover
            on:dragleave=on_dragleave
            on:click=on_click
        >
            <input
                type="file"
                accept=".csv"
                style="display: none"
                node_ref=input_ref
                on:change=on_change
                on:click=|ev: MouseEvent| ev.stop_propagation()
            />
            <div class="upload-icon">"📁"</div>
            <p>"Drop your CSV file here or click to browse"</p>
            <p class="text-muted">"Product title, description, BSR, rating and review columns are used when present"</p>
        </div>
    }
}

fn handle_file<F>(file: File, on_csv_loaded: F)
where
    F: Fn(String) + 'static,
{
    if let Err(e) = ensure_csv_name(&file.name()) {
        alert(&e.to_string());
        return;
    }

    let reader = match FileReader::new() {
        Ok(reader) => reader,
        Err(e) => {
            gloo::console::error!(format!("FileReader生成失敗: {:?}", e));
            alert(READ_ERROR_MESSAGE);
            return;
        }
    };

    let reader_clone = reader.clone();
    let onload = Closure::wrap(Box::new(move |_: web_sys::ProgressEvent| {
        match reader_clone.result().ok().and_then(|r| r.as_string()) {
            Some(text) => on_csv_loaded(text),
            None => alert(READ_ERROR_MESSAGE),
        }
    }) as Box<dyn FnMut(_)>);

    let onerror = Closure::wrap(Box::new(move |_: web_sys::ProgressEvent| {
        alert(READ_ERROR_MESSAGE);
    }) as Box<dyn FnMut(_)>);

    reader.set_onload(Some(onload.as_ref().unchecked_ref()));
    reader.set_onerror(Some(onerror.as_ref().unchecked_ref()));
    onload.forget();
    onerror.forget();

    if reader.read_as_text(&file).is_err() {
        alert(READ_ERROR_MESSAGE);
    }
}
