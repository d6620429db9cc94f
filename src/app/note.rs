//! `/note.txt` 路由：看起来像文件，实际由处理器直接返回文本

pub const NOTE_TEXT: &str = "esto no es un archivo";

pub async fn get_note() -> &'static str {
    NOTE_TEXT
}
