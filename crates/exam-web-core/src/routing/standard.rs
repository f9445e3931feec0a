//! The platform's route table.

use super::record::{RouteRecord, View};

/// Returns the route definitions of the platform, in declaration order.
pub fn standard_routes() -> Vec<RouteRecord> {
    vec![
        RouteRecord::new("/").redirect("/home"),
        RouteRecord::new("/home")
            .name("Home")
            .view(View::Home)
            .title("首页"),
        RouteRecord::new("/admin")
            .name("AdminLayout")
            .view(View::AdminLayout)
            .redirect("/admin/welcome")
            .children(admin_children()),
        RouteRecord::new("/exam/list")
            .name("PaperListForExam")
            .view(View::PaperListForExam)
            .title("选择考试"),
        RouteRecord::new("/exam/start/:paperId")
            .name("ExamStart")
            .view(View::ExamStart)
            .title("开始考试"),
        RouteRecord::new("/exam/:id")
            .name("Exam")
            .view(View::Exam)
            .title("在线考试"),
        RouteRecord::new("/exam-result")
            .name("ExamResult")
            .view(View::ExamResult)
            .title("考试结果"),
        RouteRecord::new("/exam-result/:id")
            .name("ExamResultById")
            .view(View::ExamResult)
            .title("考试结果"),
        RouteRecord::new("/exam-ranking")
            .name("ExamRanking")
            .view(View::ExamRanking)
            .title("考试排行榜"),
        RouteRecord::new("/practice")
            .name("Practice")
            .view(View::Practice)
            .title("刷题练习"),
        RouteRecord::new("/videos")
            .name("VideoList")
            .view(View::VideoList)
            .title("3分钟技术短视频"),
        RouteRecord::new("/videos/:id")
            .name("VideoDetail")
            .view(View::VideoDetail)
            .title("3分钟技术短视频"),
        // Old share links used the singular form.
        RouteRecord::new("/video/:id").redirect("/videos/:id"),
        RouteRecord::new("/interview-questions")
            .name("InterviewQuestionList")
            .view(View::InterviewQuestionList)
            .title("企业面试真题"),
        RouteRecord::new("/interview-questions/:id")
            .name("InterviewQuestionDetail")
            .view(View::InterviewQuestionDetail)
            .title("真题详情"),
        RouteRecord::new("/interview-practice/:id")
            .name("InterviewPractice")
            .view(View::InterviewPractice)
            .title("真题练习"),
        RouteRecord::new("/mock-interview")
            .name("MockInterview")
            .view(View::MockInterview)
            .title("模拟面试"),
        RouteRecord::new("/mock-interview/:id")
            .name("MockInterviewDetail")
            .view(View::MockInterviewDetail)
            .title("面试详情"),
        RouteRecord::new("/interview-result/:id")
            .name("InterviewResult")
            .view(View::InterviewResult)
            .title("面试结果"),
        RouteRecord::new("/interview-codes")
            .name("InterviewCodes")
            .view(View::InterviewCodes)
            .title("邀请码管理"),
        RouteRecord::new("/interview-codes/activate")
            .name("ActivateCode")
            .view(View::ActivateCode)
            .title("激活邀请码"),
        RouteRecord::new("/company-manage")
            .name("CompanyManage")
            .view(View::CompanyManage)
            .title("企业管理"),
        RouteRecord::new("/pending-question-manage")
            .name("PendingQuestionManage")
            .view(View::PendingQuestionManage)
            .title("用户上传审核"),
    ]
}

fn admin_children() -> Vec<RouteRecord> {
    [
        ("welcome", "Welcome", View::Welcome, "欢迎"),
        ("question-manage", "QuestionManage", View::QuestionManage, "题目管理"),
        ("category-manage", "CategoryManage", View::CategoryManage, "分类管理"),
        ("paper-manage", "PaperManage", View::PaperManage, "试卷管理"),
        ("score-manage", "ScoreManage", View::ScoreManage, "成绩管理"),
        ("banner-manage", "BannerManage", View::BannerManage, "轮播图管理"),
        ("notice-manage", "NoticeManage", View::NoticeManage, "公告管理"),
        ("video-manage", "VideoManage", View::VideoManage, "视频管理"),
        (
            "video-category-manage",
            "VideoCategoryManage",
            View::VideoCategoryManage,
            "视频分类管理",
        ),
        ("paper-create", "PaperCreate", View::PaperCreate, "创建新试卷"),
    ]
    .into_iter()
    .map(|(path, name, view, title)| RouteRecord::new(path).name(name).view(view).title(title))
    .collect()
}
