//! 중국어 번체 → 간체 조회용 변환
//!
//! 빈도 테이블은 간체 기준이므로 번체 토큰을 조회하기 전에 간체로 바꿉니다.
//! 내장 표는 자주 쓰는 글자만 담고 있으며, 데이터 디렉토리의
//! `_chinese_mapping.msgpack.gz` (코드포인트 → 문자열)로 교체할 수 있습니다.

use std::collections::HashMap;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use std::sync::LazyLock;

use flate2::read::GzDecoder;

use super::normalize::casefold;
use crate::error::{Result, WordfreqError};

/// 데이터 디렉토리 안의 변환 표 파일명
pub const CHINESE_MAPPING_FILE: &str = "_chinese_mapping.msgpack.gz";

/// 번체-간체 글자 쌍 (공백 구분)
const TRADITIONAL_PAIRS: &str = "\
這这 個个 們们 來来 時时 為为 爲为 說说 國国 會会 對对 學学 過过 後后 麼么 沒没 還还 \
裡里 開开 發发 見见 長长 頭头 點点 問问 現现 進进 動动 種种 樣样 關关 機机 從从 經经 \
實实 與与 當当 應应 無无 電电 話话 語语 東东 車车 書书 歡欢 謝谢 號号 買买 賣卖 愛爱 \
讓让 間间 邊边 氣气 兒儿 門门 馬马 魚鱼 鳥鸟 龍龙 風风 飛飞 體体 題题 認认 識识 讀读 \
寫写 聽听 變变 臺台 灣湾 萬万 億亿 歲岁 錢钱 銀银 鐵铁 報报 紙纸 級级 線线 紅红 綠绿 \
藍蓝 黃黄 廣广 場场 區区 華华 業业 產产 員员 師师 總总 將将 軍军 戰战 權权 義义 務务 \
傳传 統统 約约 結结 給给 親亲 飯饭 麵面 雞鸡 葉叶 樂乐 園园 圖图 館馆 醫医 藥药 療疗 \
歷历 陽阳 陰阴 雲云 層层 廳厅 擊击 擇择 擴扩 據据 護护 議议 論论 許许 試试 詞词 譯译 \
課课 調调 誰谁 貝贝 負负 費费 質质 資资 購购 貨货 順顺 須须 預预 領领 顏颜 願愿 類类 \
顯显 飲饮 驗验 鬥斗 齒齿 龜龟 並并 亂乱 僅仅 價价 優优 內内 兩两 劃划 劍剑 勞劳 勢势 \
協协 單单 嚴严 壓压 塊块 壞坏 夢梦 奮奋 孫孙 寶宝 屬属 島岛 帶带 幣币 幫帮 庫库 張张 \
強强 彈弹 徑径 復复 憶忆 懷怀 戲戏 掃扫 掛挂 採采 換换 揚扬 損损 搖摇 數数 斷断 於于 \
條条 極极 構构 槍枪 標标 橋桥 樹树 歐欧 殺杀 決决 減减 測测 溫温 滅灭 漢汉 準准 烏乌 \
燈灯 營营 爺爷 牆墙 獎奖 獨独 環环 畫画 異异 盡尽 監监 確确 礎础 禮礼 稱称 穩稳 窮穷 \
筆笔 節节 範范 簡简 糧粮 紀纪 純纯 細细 終终 組组 維维 網网 緊紧 練练 縣县 縮缩 績绩 \
續续 習习 聖圣 聯联 聲声 肅肃 脫脱 腦脑 臉脸 興兴 舊旧 艦舰 藝艺 蘇苏 蘭兰 處处 蟲虫 \
術术 衛卫 裝装 複复 規规 視视 覺觉 觀观 訂订 計计 記记 設设 訪访 證证 評评 該该 誌志 \
誤误 請请 諸诸 講讲 謎谜 豐丰 貓猫 財财 貧贫 貴贵 貿贸 賽赛 贊赞 趙赵 跡迹 蹤踪 軟软 \
較较 輕轻 載载 輪轮 轉转 辦办 農农 連连 週周 運运 達达 遠远 適适 選选 遺遗 郵邮 鄉乡 \
醬酱 釋释 針针 鐘钟 鍵键 錄录 鏡镜 閉闭 闆板 隊队 階阶 際际 隨随 險险 隻只 雙双 雜杂 \
離离 難难 靈灵 靜静 韓韩 響响 頁页 項项 頓顿 頻频 額额 飄飘 養养 餘余 驚惊 髮发 鬧闹 \
魯鲁 鮮鲜 麗丽 黨党 齊齐 嗎吗 喬乔 啟启 團团 圍围 夠够 嘗尝 寧宁 專专 尋寻 導导 歸归 \
漁渔 濟济 灑洒 熱热 獻献 壽寿 廢废 廠厂 擁拥 攝摄 攤摊 敵敌 暫暂 曉晓 樓楼 櫃柜 漲涨 \
滿满 潔洁 澤泽 濕湿 爐炉 犧牺 狀状 獲获 猶犹 瑪玛 盤盘 眾众 碼码 礦矿 禍祸 積积 竊窃 \
築筑 籃篮 紐纽 綁绑 緒绪 編编 緣缘 織织 繼继 罰罚 羅罗 聞闻 職职 膽胆 艱艰 莊庄 萊莱 \
蔣蒋 蘋苹 虛虚 蝦虾 衝冲 補补 製制 襲袭 覽览 詳详 誕诞 誠诚 諾诺 謀谋 譽誉 讚赞 豬猪 \
賓宾 賴赖 趨趋 踐践 躍跃 輛辆 輸输 辭辞 邏逻 醜丑 釣钓 鈴铃 銅铜 銷销 鋼钢 錯错 鍋锅 \
鎖锁 鎮镇 鏈链 閃闪 閱阅 陳陈 陸陆 隱隐 雖虽 霧雾 韻韵 頂顶 頸颈 顆颗 顧顾 飢饥 飽饱 \
餅饼 駕驾 騎骑 騙骗 驅驱 髒脏 鯨鲸 鳳凤 鴨鸭 鵝鹅 鷹鹰 鹽盐 麥麦 齡龄";

/// 내장 번체 → 간체 표
static BUILTIN_TABLE: LazyLock<HashMap<char, char>> = LazyLock::new(|| {
    let mut table = HashMap::new();
    for pair in TRADITIONAL_PAIRS.split_whitespace() {
        let mut chars = pair.chars();
        if let (Some(traditional), Some(simplified)) = (chars.next(), chars.next()) {
            table.insert(traditional, simplified);
        }
    }
    table
});

/// 번체 → 간체 변환기
#[derive(Debug, Clone, Default)]
pub struct ChineseConverter {
    /// 파일에서 읽은 표 (없으면 내장 표 사용)
    mapping: Option<HashMap<char, String>>,
}

impl ChineseConverter {
    /// 내장 표를 쓰는 변환기
    pub fn builtin() -> Self {
        Self::default()
    }

    /// 데이터 디렉토리에 변환 표 파일이 있으면 그것을, 없으면 내장 표를 사용
    pub fn from_data_dir(data_dir: &Path) -> Result<Self> {
        let path = data_dir.join(CHINESE_MAPPING_FILE);
        if path.is_file() {
            Self::load(&path)
        } else {
            Ok(Self::builtin())
        }
    }

    /// gzip 압축된 msgpack 맵 (코드포인트 → 문자열) 로드
    pub fn load(path: &Path) -> Result<Self> {
        let reader = GzDecoder::new(BufReader::new(File::open(path)?));
        let raw: HashMap<u32, String> =
            rmp_serde::from_read(reader).map_err(|e| WordfreqError::Decode(e.to_string()))?;

        let mut mapping = HashMap::with_capacity(raw.len());
        for (codepoint, replacement) in raw {
            match char::from_u32(codepoint) {
                Some(c) => {
                    mapping.insert(c, replacement);
                }
                None => {
                    return Err(WordfreqError::Format(format!(
                        "잘못된 코드포인트: {}",
                        codepoint
                    )))
                }
            }
        }
        log::debug!("중국어 변환 표 로드: {} ({}자)", path.display(), mapping.len());
        Ok(Self {
            mapping: Some(mapping),
        })
    }

    /// 한 글자 변환 결과를 `out`에 추가
    fn push_simplified(&self, c: char, out: &mut String) {
        match &self.mapping {
            Some(mapping) => match mapping.get(&c) {
                Some(replacement) => out.push_str(replacement),
                None => out.push(c),
            },
            None => out.push(*BUILTIN_TABLE.get(&c).unwrap_or(&c)),
        }
    }

    /// 간체로 변환한 뒤 대소문자 접기
    ///
    /// 변환 표에 대문자가 섞여 있어도 조회 키가 소문자가 되도록 마지막에
    /// 한 번 더 접습니다.
    ///
    /// # Examples
    /// ```
    /// use wordfreq::core::ChineseConverter;
    /// assert_eq!(ChineseConverter::builtin().simplify("謝謝"), "谢谢");
    /// assert_eq!(ChineseConverter::builtin().simplify("謝謝ABC"), "谢谢abc");
    /// ```
    pub fn simplify(&self, text: &str) -> String {
        let mut result = String::with_capacity(text.len());
        for c in text.chars() {
            self.push_simplified(c, &mut result);
        }
        casefold(&result)
    }

    /// 간체로 변환하면서 위치 대응표 생성
    ///
    /// 분할용이므로 대소문자는 건드리지 않습니다 (입력은 이미 정규화됨).
    ///
    /// 반환되는 대응표는 원문 각 글자의 시작 위치를 (변환문 바이트 위치,
    /// 원문 바이트 위치) 쌍으로 담고, 마지막에 두 문자열의 끝 위치를 담습니다.
    pub fn simplify_with_offsets(&self, text: &str) -> (String, Vec<(usize, usize)>) {
        let mut result = String::with_capacity(text.len());
        let mut offsets = Vec::with_capacity(text.len() + 1);
        for (original, c) in text.char_indices() {
            offsets.push((result.len(), original));
            self.push_simplified(c, &mut result);
        }
        offsets.push((result.len(), text.len()));
        (result, offsets)
    }
}

/// 변환문 바이트 위치를 원문 바이트 위치로 되돌림
///
/// 글자 중간을 가리키면 `round_up`에 따라 앞/뒤 글자 경계로 맞춥니다.
pub fn original_offset(offsets: &[(usize, usize)], simplified: usize, round_up: bool) -> usize {
    match offsets.binary_search_by_key(&simplified, |&(s, _)| s) {
        Ok(i) => offsets[i].1,
        Err(i) if round_up => offsets.get(i).map(|&(_, o)| o).unwrap_or(0),
        Err(i) => i.checked_sub(1).map(|j| offsets[j].1).unwrap_or(0),
    }
}
