//! Built-in 2026 tables.

use super::{FinancialCalendar, Festival, Milestone, PublicHoliday, TaxDeadline, WeeklyItem};

fn festivals(rows: &[(&str, &str, &str)]) -> Vec<Festival> {
    rows.iter()
        .map(|(name, date, description)| Festival {
            name: name.to_string(),
            date: date.to_string(),
            description: description.to_string(),
        })
        .collect()
}

fn weekly(rows: &[(u8, &str, &str)]) -> Vec<WeeklyItem> {
    rows.iter()
        .map(|(weekday, title, description)| WeeklyItem {
            weekday: *weekday,
            title: title.to_string(),
            description: description.to_string(),
        })
        .collect()
}

pub(super) fn public_holidays() -> Vec<PublicHoliday> {
    [
        ("元旦", "2026-01-01", 3),
        ("春节", "2026-02-15", 9),
        ("清明节", "2026-04-04", 3),
        ("劳动节", "2026-05-01", 5),
        ("端午节", "2026-06-19", 3),
        ("中秋节", "2026-09-25", 3),
        ("国庆节", "2026-10-01", 7),
    ]
    .iter()
    .map(|(name, start, days)| PublicHoliday {
        name: name.to_string(),
        start: start.to_string(),
        days: *days,
    })
    .collect()
}

pub(super) fn lunar_festivals() -> Vec<Festival> {
    festivals(&[
        ("腊八节 🥣", "2026-01-26", "农历腊月初八，喝腊八粥"),
        ("小年 🧹", "2026-02-10", "农历腊月廿三，祭灶扫尘"),
        ("除夕 🏮", "2026-02-16", "农历腊月廿九，阖家团圆守岁"),
        ("春节 🧧", "2026-02-17", "农历正月初一，新春佳节"),
        ("元宵节 🏮", "2026-03-03", "农历正月十五，赏花灯吃汤圆"),
        ("龙抬头 🐉", "2026-03-20", "农历二月初二"),
        ("端午节 🐲", "2026-06-19", "农历五月初五，赛龙舟吃粽子"),
        ("七夕节 💕", "2026-08-19", "农历七月初七，中国情人节"),
        ("中元节 🕯️", "2026-08-27", "农历七月十五"),
        ("中秋节 🥮", "2026-09-25", "农历八月十五，赏月吃月饼"),
        ("重阳节 🌼", "2026-10-18", "农历九月初九，登高敬老"),
    ])
}

pub(super) fn solar_terms() -> Vec<Festival> {
    festivals(&[
        ("小寒", "2026-01-05", "天气渐寒，尚未大冷"),
        ("大寒", "2026-01-20", "一年中最冷的时节"),
        ("立春", "2026-02-04", "春季开始"),
        ("雨水", "2026-02-18", "降雨开始，雨量渐增"),
        ("惊蛰", "2026-03-05", "春雷乍动，惊醒蛰伏的昆虫"),
        ("春分", "2026-03-20", "昼夜平分"),
        ("清明", "2026-04-05", "天气晴朗，草木繁茂"),
        ("谷雨", "2026-04-20", "雨生百谷"),
        ("立夏", "2026-05-05", "夏季开始"),
        ("小满", "2026-05-21", "麦类等夏熟作物籽粒开始饱满"),
        ("芒种", "2026-06-05", "有芒作物成熟，适合播种"),
        ("夏至", "2026-06-21", "白昼最长"),
        ("小暑", "2026-07-07", "天气开始炎热"),
        ("大暑", "2026-07-23", "一年中最热的时节"),
        ("立秋", "2026-08-07", "秋季开始"),
        ("处暑", "2026-08-23", "炎热的暑天结束"),
        ("白露", "2026-09-07", "天气转凉，露凝而白"),
        ("秋分", "2026-09-23", "昼夜平分"),
        ("寒露", "2026-10-08", "露水寒冷，将要结冰"),
        ("霜降", "2026-10-23", "开始有霜"),
        ("立冬", "2026-11-07", "冬季开始"),
        ("小雪", "2026-11-22", "开始下雪"),
        ("大雪", "2026-12-07", "降雪量增多"),
        ("冬至", "2026-12-22", "白昼最短"),
    ])
}

pub(super) fn international_holidays() -> Vec<Festival> {
    festivals(&[
        ("情人节 💖", "2026-02-14", "西方情人节"),
        ("妇女节 👩", "2026-03-08", "国际劳动妇女节"),
        ("植树节 🌳", "2026-03-12", "中国植树节"),
        ("愚人节 🤡", "2026-04-01", "西方愚人节"),
        ("地球日 🌍", "2026-04-22", "世界地球日"),
        ("母亲节 🌷", "2026-05-10", "五月第二个星期日"),
        ("护士节 👩‍⚕️", "2026-05-12", "国际护士节"),
        ("儿童节 🎈", "2026-06-01", "国际儿童节"),
        ("父亲节 👔", "2026-06-21", "六月第三个星期日"),
        ("万圣节 🎃", "2026-10-31", "西方万圣节前夜"),
        ("感恩节 🦃", "2026-11-26", "十一月第四个星期四"),
        ("平安夜 🔔", "2026-12-24", "圣诞前夜"),
        ("圣诞节 🎄", "2026-12-25", "西方圣诞节"),
    ])
}

pub(super) fn countdowns() -> Vec<Milestone> {
    [
        ("高考 📝", "2026-06-07", "2026-06-09", "全国普通高等学校招生统一考试"),
        ("考研 📚", "2026-12-26", "2026-12-28", "全国硕士研究生招生考试"),
        ("情人节 💖", "2026-02-14", "2026-02-14", "西方情人节"),
        ("520表白日 💕", "2026-05-20", "2026-05-20", "网络情人节"),
        ("双十一购物节 🛒", "2026-11-11", "2026-11-11", "购物狂欢节"),
        ("双十二购物节 🎁", "2026-12-12", "2026-12-12", "年终购物节"),
        ("跨年夜 🎆", "2026-12-31", "2026-12-31", "告别2026迎接2027"),
        ("平安夜 🔔", "2026-12-24", "2026-12-24", "圣诞前夜"),
        ("圣诞节 🎄", "2026-12-25", "2026-12-25", "圣诞节"),
    ]
    .iter()
    .map(|(name, start, end, description)| Milestone {
        name: name.to_string(),
        start: start.to_string(),
        end: end.to_string(),
        description: description.to_string(),
    })
    .collect()
}

pub(super) fn weekly_reminders() -> Vec<WeeklyItem> {
    weekly(&[
        (0, "周一加油 💪", "新的一周开始了，为目标努力！"),
        (1, "周二继续 🔥", "保持昨天的干劲，继续前进！"),
        (2, "周三过半 ⚡", "一周过半，坚持就是胜利！"),
        (3, "周四冲刺 🚀", "即将迎来周末，加油冲刺！"),
        (4, "周五快乐 🎉", "TGIF! 周末就在眼前！"),
        (5, "周六休息 😊", "好好休息，充电放松！"),
        (6, "周日准备 📅", "为下周做好准备！"),
    ])
}

pub(super) fn health_tips() -> Vec<WeeklyItem> {
    weekly(&[
        (0, "💧 多喝水", "每天保持2000ml水分摄入"),
        (1, "🏃 运动锻炼", "每天至少30分钟有氧运动"),
        (2, "👀 保护眼睛", "远眺放松，避免长时间用眼"),
        (3, "🧘 放松身心", "深呼吸、冥想，释放压力"),
        (4, "🥗 健康饮食", "多吃蔬菜水果，均衡营养"),
        (5, "😴 规律作息", "保证7-8小时优质睡眠"),
        (6, "🦷 口腔护理", "早晚刷牙，饭后漱口"),
    ])
}

pub(super) fn financial() -> FinancialCalendar {
    FinancialCalendar {
        year: 2026,
        payday: 10,
        payday_title: "💰 工资日".to_string(),
        payday_description: "预计工资发放日".to_string(),
        tax_deadlines: [
            ("2026-04-15", "第一季度"),
            ("2026-07-15", "第二季度"),
            ("2026-10-15", "第三季度"),
            ("2027-01-15", "第四季度"),
        ]
        .iter()
        .map(|(date, quarter)| TaxDeadline {
            date: date.to_string(),
            quarter: quarter.to_string(),
        })
        .collect(),
        shopping_festivals: festivals(&[
            ("👩 三八女王节", "2026-03-08", "妇女节购物促销"),
            ("🛍️ 618购物节", "2026-06-18", "年中大促"),
            ("🛒 双十一购物节", "2026-11-11", "全年最大促销"),
            ("🎁 双十二购物节", "2026-12-12", "年终大促"),
        ]),
    }
}
