//! Display strings, indexed by [`Language`](super::Language).

use phf::phf_map;

pub(super) static TRANSLATIONS: phf::Map<&'static str, [&'static str; 3]> = phf_map! {
	"nav.home" => [
		"Home",
		"Trang chủ",
		"홈",
	],
	"nav.about" => [
		"About",
		"Giới thiệu",
		"소개",
	],
	"nav.skills" => [
		"Skills",
		"Kỹ năng",
		"기술",
	],
	"nav.projects" => [
		"Projects",
		"Dự án",
		"프로젝트",
	],
	"nav.contact" => [
		"Contact",
		"Liên hệ",
		"연락처",
	],
	"header.greeting" => [
		"Hello, I'm",
		"Xin chào, tôi là",
		"안녕하세요, 저는",
	],
	"header.name" => [
		"Aleam Z",
		"Aleam Z",
		"Aleam Z",
	],
	"header.title" => [
		"Full-Stack Developer",
		"Lập trình viên Full-Stack",
		"풀스택 개발자",
	],
	"header.description" => [
		"Passionate about creating innovative web solutions",
		"Đam mê tạo ra các giải pháp web sáng tạo",
		"혁신적인 웹 솔루션을 만드는 것에 열정을 가짐",
	],
	"home.greeting" => [
		"Hello World!",
		"Xin chào thế giới!",
		"안녕하세요 세계!",
	],
	"home.subtitle" => [
		"Passionate Fullstack Developer with expertise in React and modern web technologies",
		"Lập trình viên Fullstack đam mê với chuyên môn về React và công nghệ web hiện đại",
		"React와 현대적인 웹 기술에 전문성을 가진 열정적인 풀스택 개발자",
	],
	"home.description" => [
		"I create digital experiences that combine cutting-edge technology with beautiful design. Specializing in React, TypeScript, Node.js, and ASP.NET development. Graduate from University of Greenwich with Bachelor of Information Technology.",
		"Tôi tạo ra những trải nghiệm kỹ thuật số kết hợp công nghệ tiên tiến với thiết kế đẹp mắt. Chuyên về phát triển React, TypeScript, Node.js và ASP.NET. Tốt nghiệp Đại học Greenwich với bằng Cử nhân Công nghệ Thông tin.",
		"최첨단 기술과 아름다운 디자인을 결합한 디지털 경험을 만듭니다. React, TypeScript, Node.js 및 ASP.NET 개발을 전문으로 합니다. 그리니치 대학교 정보기술학사 졸업.",
	],
	"home.stats.experience" => [
		"Years Experience",
		"Năm kinh nghiệm",
		"년 경험",
	],
	"home.stats.projects" => [
		"Projects Completed",
		"Dự án hoàn thành",
		"완료된 프로젝트",
	],
	"home.stats.satisfaction" => [
		"Client Satisfaction",
		"Sự hài lòng khách hàng",
		"고객 만족도",
	],
	"home.cta.viewWork" => [
		"View My Work",
		"Xem công việc của tôi",
		"내 작업 보기",
	],
	"home.cta.getInTouch" => [
		"Get In Touch",
		"Liên hệ với tôi",
		"연락하기",
	],
	"home.code.building" => [
		"Building amazing apps!",
		"Xây dựng những ứng dụng tuyệt vời!",
		"놀라운 앱을 만드는 중!",
	],
	"home.code.learning" => [
		"Always learning new tech!",
		"Luôn học hỏi công nghệ mới!",
		"항상 새로운 기술을 배우는 중!",
	],
	"skills.title" => [
		"My Skills",
		"Kỹ năng của tôi",
		"내 기술",
	],
	"skills.subtitle" => [
		"Technologies and tools I use to bring ideas to life",
		"Công nghệ và công cụ tôi sử dụng để biến ý tưởng thành hiện thực",
		"아이디어를 현실로 만드는 데 사용하는 기술과 도구",
	],
	"skills.view.3d" => [
		"3D Showcase",
		"Trưng bày 3D",
		"3D 쇼케이스",
	],
	"skills.view.grid" => [
		"Grid",
		"Lưới",
		"그리드",
	],
	"skills.hobbies.title" => [
		"My Hobbies",
		"Sở thích của tôi",
		"내 취미",
	],
	"skills.hobbies.travel" => [
		"Travel",
		"Phượt",
		"여행",
	],
	"skills.hobbies.travel.desc" => [
		"Exploring new routes, experiencing culture and beautiful landscapes",
		"Khám phá những cung đường mới, trải nghiệm văn hóa và cảnh đẹp",
		"새로운 경로 탐험, 문화와 아름다운 풍경 체험",
	],
	"skills.hobbies.football" => [
		"Football",
		"Bóng Đá",
		"축구",
	],
	"skills.hobbies.football.desc" => [
		"Passionate about sports, fitness training and team spirit",
		"Đam mê thể thao, rèn luyện sức khỏe và tinh thần đồng đội",
		"스포츠에 대한 열정, 피트니스 훈련 및 팀워크",
	],
	"skills.hobbies.gaming" => [
		"Gaming",
		"Gaming",
		"게임",
	],
	"skills.hobbies.gaming.desc" => [
		"Enjoy strategy games and technology entertainment",
		"Thích thú với các game chiến thuật và giải trí công nghệ",
		"전략 게임과 기술 엔터테인먼트를 즐김",
	],
	"skills.hobbies.farming" => [
		"Farming",
		"Farmer",
		"농업",
	],
	"skills.hobbies.farming.desc" => [
		"Love gardening, caring for plants and nature",
		"Yêu thích trồng trọt, chăm sóc cây cối và thiên nhiên",
		"정원 가꾸기, 식물과 자연 돌보기를 좋아함",
	],
	"projects.title" => [
		"My Projects",
		"Dự án của tôi",
		"내 프로젝트",
	],
	"projects.subtitle" => [
		"Some of my recent work and personal projects",
		"Một số dự án gần đây và dự án cá nhân của tôi",
		"최근 작업과 개인 프로젝트 중 일부",
	],
	"projects.view.live" => [
		"View Live",
		"Xem trực tiếp",
		"라이브 보기",
	],
	"projects.view.source" => [
		"View Source",
		"Xem mã nguồn",
		"소스 보기",
	],
	"projects.source.private" => [
		"Source code is private",
		"Mã nguồn là bảo mật",
		"소스 코드는 비공개입니다",
	],
	"projects.filter.all" => [
		"All",
		"Tất cả",
		"전체",
	],
	"projects.filter.frontend" => [
		"Frontend",
		"Frontend",
		"프론트엔드",
	],
	"projects.filter.backend" => [
		"Backend",
		"Backend",
		"백엔드",
	],
	"projects.filter.fullstack" => [
		"Full-Stack",
		"Full-Stack",
		"풀스택",
	],
	"projects.preview.loading" => [
		"Loading preview…",
		"Đang tải xem trước…",
		"미리보기 로딩 중…",
	],
	"projects.preview.unavailable" => [
		"Preview not available",
		"Không có bản xem trước",
		"미리보기를 사용할 수 없습니다",
	],
	"projects.cta.text" => [
		"Interested in working together? Let's discuss your project!",
		"Quan tâm hợp tác? Hãy trao đổi về dự án của bạn!",
		"함께 작업하고 싶으신가요? 프로젝트에 대해 이야기해요!",
	],
	"projects.webStore.title" => [
		"Web Store",
		"Web Store",
		"웹 스토어",
	],
	"projects.webStore.description" => [
		"Web Store is a platform for selling products online",
		"Web Store là nền tảng bán hàng trực tuyến",
		"웹 스토어는 온라인으로 제품을 판매하는 플랫폼입니다",
	],
	"projects.salesManagement.title" => [
		"Sales Management",
		"Quản lý bán hàng",
		"판매 관리",
	],
	"projects.salesManagement.description" => [
		"Sales Management is a platform for managing sales",
		"Quản lý bán hàng là nền tảng quản lý bán hàng",
		"판매 관리는 판매를 관리하는 플랫폼입니다",
	],
	"projects.ciResearch.title" => [
		"CI Research Company Website",
		"Website Công ty Nghiên cứu CI",
		"CI 리서치 회사 웹사이트",
	],
	"projects.ciResearch.description" => [
		"Corporate website for CI Research with modern UI/UX",
		"Website doanh nghiệp cho CI Research với UI/UX hiện đại",
		"현대적인 UI/UX를 갖춘 CI 리서치 기업 웹사이트",
	],
	"projects.amazingTech.title" => [
		"Amazing Tech Interface",
		"Giao diện Công ty Công nghệ Amazing",
		"어메이징 테크 회사 인터페이스",
	],
	"projects.amazingTech.description" => [
		"Landing page interface with modular components",
		"Giao diện trang chủ với các component mô-đun",
		"모듈형 컴포넌트로 구성된 랜딩 페이지 인터페이스",
	],
	"projects.portfolio.title" => [
		"Portfolio Website",
		"Website Portfolio",
		"포트폴리오 웹사이트",
	],
	"projects.portfolio.description" => [
		"My personal portfolio built with React and TypeScript",
		"Portfolio cá nhân xây dựng với React và TypeScript",
		"React와 TypeScript로 만든 개인 포트폴리오",
	],
	"projects.maxius.title" => [
		"Maxius Frontend Test",
		"Maxius Frontend Test",
		"Maxius 프론트엔드 테스트",
	],
	"projects.maxius.description" => [
		"A frontend assessment featuring product listing, search and modern UI with Ant Design.",
		"Bài test frontend với danh sách sản phẩm, tìm kiếm và UI hiện đại dùng Ant Design.",
		"제품 목록, 검색 및 Ant Design 기반의 모던 UI를 포함한 프론트엔드 과제.",
	],
	"projects.amanotes.title" => [
		"Amanotes Test Job",
		"Amanotes Test Job",
		"Amanotes 테스트 과제",
	],
	"projects.amanotes.description" => [
		"Music learning e-learning demo with search, filters, cart and AI assistant.",
		"Demo e-learning âm nhạc với tìm kiếm, bộ lọc, giỏ hàng và trợ lý AI.",
		"검색, 필터, 장바구니 및 AI 어시스턴트를 포함한 음악 e-러닝 데모.",
	],
	"projects.ecommerce.title" => [
		"Ecommerce",
		"Ecommerce",
		"이커머스",
	],
	"common.prev" => [
		"Previous",
		"Trước",
		"이전",
	],
	"common.next" => [
		"Next",
		"Tiếp",
		"다음",
	],
	"contact.title" => [
		"Get In Touch",
		"Liên hệ với tôi",
		"연락하기",
	],
	"contact.subtitle" => [
		"Feel free to reach out for collaborations or just a friendly hello",
		"Hãy liên hệ để hợp tác hoặc chỉ để chào hỏi",
		"협업이나 친근한 인사를 위해 언제든 연락하세요",
	],
	"contact.form.name" => [
		"Name",
		"Tên",
		"이름",
	],
	"contact.form.email" => [
		"Email",
		"Email",
		"이메일",
	],
	"contact.form.message" => [
		"Message",
		"Tin nhắn",
		"메시지",
	],
	"contact.form.send" => [
		"Send Message",
		"Gửi tin nhắn",
		"메시지 보내기",
	],
	"common.loading" => [
		"Loading...",
		"Đang tải...",
		"로딩 중...",
	],
	"common.error" => [
		"Error",
		"Lỗi",
		"오류",
	],
	"common.close" => [
		"Close",
		"Đóng",
		"닫기",
	],
	"common.open" => [
		"Open",
		"Mở",
		"열기",
	],
	"demo.liveDemo" => ["Live Demo", "Bản demo trực tiếp", "라이브 데모"],
	"demo.sourceCode" => ["Source Code", "Mã nguồn", "소스 코드"],
	"demo.loadingTree" => ["Loading repository...", "Đang tải kho mã...", "저장소를 불러오는 중..."],
	"demo.loadFailed" => ["Failed to load repository. Showing mock structure.", "Không thể tải kho mã. Đang hiển thị cấu trúc mẫu.", "저장소를 불러오지 못했습니다. 예시 구조를 표시합니다."],
	"demo.selectFile" => ["Select a file to view its content", "Chọn một tệp để xem nội dung", "내용을 보려면 파일을 선택하세요"],
	"demo.loadingFile" => ["Loading file...", "Đang tải tệp...", "파일을 불러오는 중..."],
	"demo.unavailable" => ["Demo URL not available", "Không có URL demo", "데모 URL을 사용할 수 없습니다"],
	"demo.checkLive" => ["Check the live link for demo", "Xem liên kết trực tiếp để xem demo", "데모는 라이브 링크를 확인하세요"],
	"demo.embedBlocked" => ["Site may block embedding in an iframe.", "Trang web có thể chặn nhúng trong iframe.", "사이트가 iframe 삽입을 차단할 수 있습니다."],
	"demo.openLive" => ["Open Live Demo", "Mở bản demo trực tiếp", "라이브 데모 열기"],
	"skills.category.frontend" => ["Frontend", "Frontend", "프론트엔드"],
	"skills.category.backend" => ["Backend", "Backend", "백엔드"],
	"skills.category.database" => ["Database", "Cơ sở dữ liệu", "데이터베이스"],
	"skills.category.tools" => ["Tools", "Công cụ", "도구"],
	"skills.category.cloud" => ["Cloud", "Đám mây", "클라우드"],
	"contact.location" => ["Location", "Địa chỉ", "위치"],
	"contact.phone" => ["Phone", "Điện thoại", "전화"],
	"contact.email" => ["Email", "Email", "이메일"],
	"contact.linkedin" => ["LinkedIn", "LinkedIn", "LinkedIn"],
	"contact.callNow" => ["Call Now", "Gọi ngay", "지금 전화하기"],
	"contact.sendEmail" => ["Send Email", "Gửi email", "이메일 보내기"],
	"contact.connect" => ["Connect with me professionally", "Kết nối với tôi", "저와 연결하세요"],
	"contact.viewProfile" => ["View Profile", "Xem hồ sơ", "프로필 보기"],
	"contact.github" => ["GitHub", "GitHub", "GitHub"],
	"contact.githubText" => ["Check out my code and projects", "Xem mã nguồn và dự án của tôi", "제 코드와 프로젝트를 확인하세요"],
	"contact.visitGithub" => ["Visit GitHub", "Truy cập GitHub", "GitHub 방문"],
	"contact.footer" => ["Let's build something amazing together! 🚀", "Cùng nhau xây dựng điều tuyệt vời! 🚀", "함께 멋진 것을 만들어요! 🚀"],
	"demo.close" => ["Close", "Đóng", "닫기"],
	"demo.sourcePrivate" => ["This project's source code is private and cannot be displayed.", "Mã nguồn của dự án này là riêng tư và không thể hiển thị.", "이 프로젝트의 소스 코드는 비공개이므로 표시할 수 없습니다."],
	"demo.structure" => ["Project Structure", "Cấu trúc dự án", "프로젝트 구조"],
	"demo.technologies" => ["Technologies:", "Công nghệ:", "기술:"],
	"demo.viewGithub" => ["View on GitHub", "Xem trên GitHub", "GitHub에서 보기"],
	"demo.dismiss" => ["Dismiss", "Bỏ qua", "닫기"],
};
