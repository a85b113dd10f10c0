pub mod requests;
pub mod responses;

pub use requests::{LoginRequest, RegisterRequest, UpdateProfileRequest};
pub use responses::{
    BEARER_TOKEN_TYPE, LoginResponse, RefreshTokenResponse, TokenVerificationResponse,
    UserInfoResponse,
};
