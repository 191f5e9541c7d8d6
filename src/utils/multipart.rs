//! `multipart/form-data` 文本字段读取
//!
//! 浏览器以 `FormData` 提交时走这里，字段按出现顺序折叠为键值对，
//! 与 urlencoded 表单共用同一套解析。

use actix_multipart::Multipart;
use actix_web::{Error, HttpMessage, HttpRequest};
use futures_util::TryStreamExt;
use futures_util::stream::StreamExt;

use super::parameter_error_handler::multipart_error_handler;

/// 单个文本字段的最大字节数
pub const MAX_TEXT_FIELD_SIZE: usize = 64 * 1024;

pub fn is_multipart(req: &HttpRequest) -> bool {
    req.content_type().eq_ignore_ascii_case("multipart/form-data")
}

/// 读取全部文本字段，未命名的部分被忽略
pub async fn read_text_fields(
    req: &HttpRequest,
    mut payload: Multipart,
) -> Result<Vec<(String, String)>, Error> {
    let mut pairs = Vec::new();

    while let Some(mut field) = payload
        .try_next()
        .await
        .map_err(|e| multipart_error_handler(e.to_string(), req))?
    {
        let name = field
            .content_disposition()
            .and_then(|cd| cd.get_name())
            .map(str::to_string);

        let mut value = Vec::new();
        while let Some(chunk) = field.next().await {
            let data = chunk.map_err(|e| multipart_error_handler(e.to_string(), req))?;
            if value.len() + data.len() > MAX_TEXT_FIELD_SIZE {
                return Err(multipart_error_handler(
                    format!("Field exceeds {MAX_TEXT_FIELD_SIZE} bytes"),
                    req,
                ));
            }
            value.extend_from_slice(&data);
        }

        let Some(name) = name else {
            continue;
        };
        let value = String::from_utf8(value)
            .map_err(|_| multipart_error_handler(format!("Field {name} is not valid UTF-8"), req))?;
        pairs.push((name, value));
    }

    Ok(pairs)
}
