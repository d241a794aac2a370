use super::Language;

/// Keys for every user-visible string in the client. Each key resolves
/// against a static per-language table, Vietnamese first as the service's
/// home audience.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum UiText {
    // Form validation
    UsernameRequired,
    UsernameMinLength,
    PasswordRequired,
    PasswordMinLength,
    ConfirmPasswordRequired,
    PasswordMismatch,
    // Auth flow
    LoginSuccess,
    RegisterSuccess,
    InvalidCredentials,
    UsernameExists,
    RequireLogin,
    LoginNow,
    // Prediction flow
    ImagesOnly,
    Analyzing,
    AnalyzingWait,
    AnalyzeFailed,
    RequestTimeout,
    RateLimitGuest,
    RateLimitUser,
    RateLimitError,
    // Result view
    NoResult,
    Redirecting,
    DataError,
    FoodNotFound,
    TryAgain,
    // Library
    LoadingData,
    NoDishesFound,
    TotalDishes,
    // History
    NoHistory,
    DeleteConfirm,
    DeleteSuccess,
    DeleteError,
    // Generic
    LoggedOut,
    GenericError,
    NetworkError,
    ServerUnreachable,
    NotLoggedIn,
}

impl UiText {
    pub fn localized(&self, language: Language) -> &'static str {
        let (vn, en) = match self {
            UiText::UsernameRequired => ("Vui lòng nhập tên đăng nhập", "Please enter username"),
            UiText::UsernameMinLength => (
                "Tên đăng nhập phải có ít nhất 3 ký tự",
                "Username must be at least 3 characters",
            ),
            UiText::PasswordRequired => ("Vui lòng nhập mật khẩu", "Please enter password"),
            UiText::PasswordMinLength => (
                "Mật khẩu phải có ít nhất 6 ký tự",
                "Password must be at least 6 characters",
            ),
            UiText::ConfirmPasswordRequired => {
                ("Vui lòng xác nhận mật khẩu", "Please confirm password")
            }
            UiText::PasswordMismatch => ("Mật khẩu xác nhận không khớp", "Passwords do not match"),
            UiText::LoginSuccess => ("Đăng nhập thành công!", "Login successful!"),
            UiText::RegisterSuccess => (
                "Đăng ký thành công! Đang chuyển sang đăng nhập...",
                "Registration successful! Switching to login...",
            ),
            UiText::InvalidCredentials => (
                "Tên đăng nhập hoặc mật khẩu không đúng",
                "Invalid username or password",
            ),
            UiText::UsernameExists => ("Tên đăng nhập đã tồn tại", "Username already exists"),
            UiText::RequireLogin => (
                "Bạn cần đăng nhập để xem lịch sử",
                "You need to login to view history",
            ),
            UiText::LoginNow => ("Đăng nhập ngay", "Login now"),
            UiText::ImagesOnly => (
                "Vui lòng chỉ tải lên file ảnh!",
                "Please upload image files only!",
            ),
            UiText::Analyzing => ("Đang phân tích...", "Analyzing..."),
            UiText::AnalyzingWait => (
                "Vui lòng đợi trong giây lát",
                "This should only take a moment",
            ),
            UiText::AnalyzeFailed => (
                "Có lỗi xảy ra khi phân tích ảnh!",
                "Something went wrong while analyzing the image!",
            ),
            UiText::RequestTimeout => (
                "Yêu cầu hết thời gian! Vui lòng thử lại.",
                "Request timed out! Please try again.",
            ),
            UiText::RateLimitGuest => (
                "Người dùng chưa đăng nhập chỉ được gửi 5 yêu cầu / 10 phút. Đăng nhập để sử dụng nhiều hơn (30 yêu cầu / 10 phút)!",
                "Guest users are limited to 5 requests / 10 minutes. Login to use more (30 requests / 10 minutes)!",
            ),
            UiText::RateLimitUser => (
                "Bạn đã gửi quá nhiều yêu cầu! Giới hạn: 30 yêu cầu / 10 phút. Vui lòng đợi một chút.",
                "You have sent too many requests! Limit: 30 requests / 10 minutes. Please wait.",
            ),
            UiText::RateLimitError => (
                "Bạn đã gửi quá nhiều yêu cầu! Vui lòng đợi một chút.",
                "Too many requests! Please wait a moment.",
            ),
            UiText::NoResult => ("Không có kết quả!", "No result!"),
            UiText::Redirecting => (
                "Đang chuyển hướng đến trang tìm kiếm...",
                "Redirecting to the search page...",
            ),
            UiText::DataError => ("Lỗi dữ liệu!", "Data error!"),
            UiText::FoodNotFound => (
                "Không tìm thấy thông tin món ăn.",
                "Food information not found.",
            ),
            UiText::TryAgain => ("Thử lại", "Try again"),
            UiText::LoadingData => ("Đang tải dữ liệu...", "Loading data..."),
            UiText::NoDishesFound => ("Không tìm thấy món ăn", "No dishes found"),
            UiText::TotalDishes => ("món ăn", "dishes"),
            UiText::NoHistory => ("Chưa có lịch sử dự đoán.", "No prediction history yet."),
            UiText::DeleteConfirm => (
                "Bạn có chắc chắn muốn xóa toàn bộ lịch sử?",
                "Are you sure you want to delete all history?",
            ),
            UiText::DeleteSuccess => (
                "Đã xóa lịch sử thành công!",
                "History deleted successfully!",
            ),
            UiText::DeleteError => (
                "Có lỗi xảy ra khi xóa lịch sử!",
                "Error deleting history!",
            ),
            UiText::LoggedOut => ("Đã đăng xuất.", "Logged out."),
            UiText::GenericError => ("Có lỗi xảy ra!", "An error occurred!"),
            UiText::NetworkError => (
                "Lỗi kết nối mạng! Vui lòng kiểm tra internet.",
                "Network error! Please check your internet connection.",
            ),
            UiText::ServerUnreachable => (
                "Không thể kết nối đến server!",
                "Cannot connect to server!",
            ),
            UiText::NotLoggedIn => ("Bạn chưa đăng nhập.", "You are not logged in."),
        };

        if language == Language::EN {
            return en;
        }

        return vn;
    }
}
