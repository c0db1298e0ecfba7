/*
Author      : Seunghwan Shin
Create date : 2025-10-20
Description : CloudWatch 알람 상태변경 이벤트를 Slack / PagerDuty 로 전달해주는 서비스

History     : 2025-10-20 Seunghwan Shin       # [v.1.0.0] first create
              2025-11-05 Seunghwan Shin       # [v.1.1.0]
                                                1) PagerDuty incident 연동 추가
                                                2) 채널 설정(slack/pagerduty/all) 추가
              2025-12-01 Seunghwan Shin       # [v.1.1.1] 중복되어 있던 알람 이벤트 추출 로직을 공용 함수로 통일
*/
mod common;
use common::*;

mod controller;
use controller::main_controller::*;

mod model;
use model::configs::config::*;

mod repository;
use repository::{pagerduty_repository_impl::*, slack_repository_impl::*};

mod service;
use service::{pagerduty_notify_service_impl::*, slack_notify_service_impl::*};

mod env_configuration;

mod traits;

mod enums;

mod utils_modules;
use utils_modules::logger_utils::*;

#[tokio::main]
async fn main() {
    /* config 설정 전역 적용 */
    dotenv().ok();

    /* 전역 로거설정 */
    set_global_logger();

    info!("Start Alarm Notifier Program");

    let config: Config = Config::new();

    /*
        Handler Dependency Injection(DI)
        The services share nothing mutable, so concurrent deliveries are safe.
    */
    let slack_repo: Arc<SlackRepositoryImpl> = Arc::new(SlackRepositoryImpl::new());
    let pagerduty_repo: Arc<PagerDutyRepositoryImpl> =
        Arc::new(PagerDutyRepositoryImpl::new(PAGERDUTY_API_URL.to_string()));

    let slack_service: Arc<SlackNotifyServiceImpl<SlackRepositoryImpl>> =
        Arc::new(SlackNotifyServiceImpl::new(
            Arc::clone(&config.notify),
            Arc::clone(&config.slack),
            slack_repo,
        ));

    let pagerduty_service: Arc<PagerDutyNotifyServiceImpl<PagerDutyRepositoryImpl>> =
        Arc::new(PagerDutyNotifyServiceImpl::new(
            Arc::clone(&config.notify),
            Arc::clone(&config.pagerduty),
            pagerduty_repo,
        ));

    let controller: MainController<
        SlackNotifyServiceImpl<SlackRepositoryImpl>,
        PagerDutyNotifyServiceImpl<PagerDutyRepositoryImpl>,
    > = MainController::new(Arc::clone(&config.notify), slack_service, pagerduty_service);

    if let Err(e) = controller.main_task().await {
        error!("[main] controller error: {:?}", e);
        std::process::exit(1);
    }
}
