// ==========================================
// 医生排班预处理系统 - 输入加载 Trait
// ==========================================
// 职责: 定义三类输入记录的读取接口,引擎层不感知数据来源
// ==========================================

use crate::domain::calendar::CalendarRecord;
use crate::domain::preference::ShiftConfRecord;
use crate::domain::staff::StaffMember;
use crate::engine::orchestrator::PreparationInput;
use crate::importer::error::ImportResult;

/// 输入加载器
pub trait InputLoader {
    /// 读取医生列表
    fn load_staff(&self) -> ImportResult<Vec<StaffMember>>;

    /// 读取班次配置
    fn load_shift_confs(&self) -> ImportResult<Vec<ShiftConfRecord>>;

    /// 读取日历
    fn load_calendar(&self) -> ImportResult<CalendarRecord>;

    /// 读取全部输入并完成边界校验
    fn load_input(&self) -> ImportResult<PreparationInput> {
        let staff = self.load_staff()?;
        let shift_confs = self.load_shift_confs()?;
        let calendar = self.load_calendar()?;

        tracing::info!(
            staff = staff.len(),
            shift_confs = shift_confs.len(),
            days = calendar.day_configurations.len(),
            "输入记录读取完成: {}-{}",
            calendar.year,
            calendar.month
        );

        Ok(PreparationInput::from_records(
            staff,
            &shift_confs,
            calendar,
        )?)
    }
}
