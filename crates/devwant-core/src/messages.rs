//! User-facing error messages.

pub const LOGIN_REQUIRED: &str = "로그인이 필요합니다.";
pub const ADMIN_REQUIRED: &str = "관리자 권한이 필요합니다.";

pub const INVALID_TOKEN: &str = "유효하지 않은 인증 정보입니다.";
pub const TOKEN_EXPIRED: &str = "인증이 만료되었습니다. 다시 로그인해주세요.";
pub const TOKEN_REVOKED: &str = "로그아웃된 인증 정보입니다.";
pub const TOKEN_OWNER_MISMATCH: &str = "다른 사용자의 인증 정보입니다.";
pub const ACCOUNT_GONE: &str = "존재하지 않는 계정입니다.";

pub const UNSUPPORTED_PROVIDER: &str = "지원하지 않는 로그인 방식입니다.";
pub const PROVIDER_DISABLED: &str = "사용할 수 없는 로그인 방식입니다.";
pub const OAUTH_STATE_INVALID: &str = "로그인 요청이 만료되었거나 올바르지 않습니다.";
pub const OAUTH_CODE_REJECTED: &str = "소셜 로그인 인증에 실패했습니다.";
pub const OAUTH_EMAIL_REQUIRED: &str = "이메일 제공에 동의해야 로그인할 수 있습니다.";
pub const OAUTH_UNAVAILABLE: &str = "소셜 로그인 서버와 통신하지 못했습니다.";

pub const BOARD_NOT_FOUND: &str = "존재하지 않는 게시판입니다.";
pub const ADMIN_BOARD_NOT_FOUND: &str = "게시판을 찾을 수 없습니다.";
pub const DELETED_BOARD_NOT_FOUND: &str = "삭제된 게시판을 찾을 수 없습니다.";
pub const BOARD_CODE_TAKEN: &str = "이미 사용 중인 게시판 코드입니다.";

pub const POST_NOT_FOUND: &str = "게시글을 찾을 수 없습니다.";
pub const POST_GONE: &str = "존재하지 않는 게시글입니다.";
pub const PARENT_POST_NOT_FOUND: &str = "원글을 찾을 수 없습니다.";
pub const REPLY_LIMIT_REACHED: &str = "이 게시글에는 더 이상 답글을 달 수 없습니다.";
pub const REPLY_POSITION_TAKEN: &str = "다른 답글이 먼저 등록되었습니다. 다시 시도해주세요.";
pub const POST_TITLE_CONTENT_REQUIRED: &str = "제목과 내용은 필수 입력사항입니다.";
pub const POST_EDIT_FORBIDDEN: &str = "게시글을 수정할 권한이 없습니다.";
pub const POST_DELETE_FORBIDDEN: &str = "게시글을 삭제할 권한이 없습니다.";

pub const COMMENT_CONTENT_REQUIRED: &str = "댓글 내용을 입력해주세요.";
pub const COMMENT_NOT_FOUND: &str = "댓글을 찾을 수 없습니다.";
pub const COMMENT_DELETE_FORBIDDEN: &str = "댓글을 삭제할 권한이 없습니다.";

pub const CATEGORY_NOT_FOUND: &str = "카테고리를 찾을 수 없습니다.";
pub const CATEGORY_NAME_TAKEN: &str = "이미 존재하는 카테고리 이름입니다.";
pub const CATEGORY_NAME_REQUIRED: &str = "카테고리 이름이 필요합니다.";
pub const INVALID_REQUEST: &str = "올바르지 않은 데이터 형식입니다.";

pub const USER_NOT_FOUND: &str = "사용자를 찾을 수 없습니다.";
pub const NAME_REQUIRED: &str = "이름을 입력해주세요";

/// Body of every 5xx response.
pub const SERVER_ERROR: &str = "서버 오류가 발생했습니다.";

/// Author name used when a token carries no display name.
pub const ANONYMOUS: &str = "익명";
