//! 请求参数提取失败时的统一处理
//!
//! 非数字的路径 ID、无法解码的表单均视为客户端错误（InvalidInput），
//! 以 400 和结构化负载返回，而不是 actix 默认的纯文本错误。

use actix_web::error::{InternalError, PathError, UrlencodedError};
use actix_web::{Error, HttpRequest, HttpResponse};
use tracing::debug;

use crate::errors::AssignmentHubError;
use crate::models::ApiResponse;

fn invalid_input_response(message: String) -> HttpResponse {
    let err = AssignmentHubError::invalid_input(message);
    HttpResponse::BadRequest().json(ApiResponse::from_error(&err))
}

pub fn path_error_handler(err: PathError, req: &HttpRequest) -> Error {
    debug!("Invalid path parameter for {}: {}", req.path(), err);
    let response = invalid_input_response(format!("Invalid path parameter: {err}"));
    InternalError::from_response(err, response).into()
}

pub fn form_error_handler(err: UrlencodedError, req: &HttpRequest) -> Error {
    debug!("Invalid form payload for {}: {}", req.path(), err);
    let response = invalid_input_response(format!("Invalid form payload: {err}"));
    InternalError::from_response(err, response).into()
}

pub fn multipart_error_handler(message: String, req: &HttpRequest) -> Error {
    debug!("Invalid multipart payload for {}: {}", req.path(), message);
    let response = invalid_input_response(format!("Invalid multipart payload: {message}"));
    InternalError::from_response(message, response).into()
}
