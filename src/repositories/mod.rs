//! 데이터 액세스 계층을 담당하는 리포지토리 모듈
//!
//! 저장소 구현은 시작 시점에 선택되어 `Arc<dyn UserStore>`로 주입됩니다.
//! MongoDB를 주 저장소로 사용하고, 로컬 실행과 테스트에는 메모리 저장소를 사용합니다.

pub mod users;
