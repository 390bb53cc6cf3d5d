//! Community rules shown on the rules view.

pub const COMMUNITY_RULES: [&str; 5] = [
    "Tôn trọng – Không kỳ thị – Không công kích cá nhân.",
    "Đăng ẩn danh tuỳ chọn; không tiết lộ thông tin riêng tư của người khác.",
    "Nội dung nhạy cảm (bạo lực, tự hại…) sẽ hiển thị cảnh báo; BQT có quyền ẩn bài.",
    "Không spam, không quảng cáo. Tranh luận lịch sự, dựa trên dữ kiện.",
    "Hãy tìm trợ giúp chuyên môn khi cần. Diễn đàn chỉ mang tính hỗ trợ cộng đồng.",
];
