//! 错误转换与请求解析配置

use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError, web};
use serde::{Deserialize, Serialize};
use tracing::error;

use crate::errors::LinkdoError;

/// Maximum accepted JSON body size.
pub const JSON_PAYLOAD_LIMIT: usize = 64 * 1024;

/// 错误响应体
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct ErrorBody {
    pub detail: String,
}

impl ResponseError for LinkdoError {
    fn status_code(&self) -> StatusCode {
        self.http_status()
    }

    fn error_response(&self) -> HttpResponse {
        // 服务端错误不向客户端暴露内部细节
        let detail = if self.is_client_error() {
            self.message().to_string()
        } else {
            error!("{}", self);
            "Internal Server Error".to_string()
        };

        HttpResponse::build(self.status_code()).json(ErrorBody { detail })
    }
}

/// JSON body 解析失败统一返回 422
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default()
        .limit(JSON_PAYLOAD_LIMIT)
        .error_handler(|err, _req| LinkdoError::validation(err.to_string()).into())
}

/// 路径参数解析失败（例如非整数 id）统一返回 422
pub fn path_config() -> web::PathConfig {
    web::PathConfig::default()
        .error_handler(|err, _req| LinkdoError::validation(err.to_string()).into())
}
