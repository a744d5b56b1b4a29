//! The "API 통신하기" lecture.

use lecture_types::{Block, Icon, IconLabel, Inline, Slide};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LectureInfo {
    pub title: &'static str,
    pub description: &'static str,
    pub date: &'static str,
}

pub const DATA_FETCHING: LectureInfo = LectureInfo {
    title: "API 통신하기",
    description: "API, HTTP",
    date: "2024-09-25 20:30",
};

const TODO_RESPONSE_TYPE: [&str; 6] = [
    "type TodoResponse = {",
    "  userId: number;",
    "  id: number;",
    "  title: string;",
    "  completed: boolean;",
    "};",
];

const FETCH_TODO: [&str; 6] = [
    "const fetchTodo = async (id: number) => {",
    "  const baseUrl = 'https://jsonplaceholder.typicode.com';",
    "  const response = await fetch(`${baseUrl}/todos/${id}`);",
    "  const data = await response.json() as TodoResponse;",
    "  return data;",
    "}",
];

fn snippet(parts: &[&[&'static str]]) -> Vec<&'static str> {
    let mut lines = Vec::new();
    for (i, part) in parts.iter().enumerate() {
        if i > 0 {
            lines.push("");
        }
        lines.extend_from_slice(part);
    }
    lines
}

fn text(parts: &[Inline]) -> Block {
    Block::Paragraph(parts.to_vec())
}

#[must_use]
pub fn data_fetching_slides() -> Vec<Slide> {
    vec![
        Slide::new(
            "목표",
            vec![Block::Bullets(vec![vec![Inline::Text(
                "React 어플리케이션에서 서버로 API 콜을 하고 응답을 받아 유저에게 보여주는 일반적인 패턴을 이해한다",
            )]])],
        ),
        Slide::new(
            "(OT 복습) 프론트엔드 - 백엔드 구조",
            vec![Block::IconRow(vec![
                IconLabel {
                    icon: Icon::Laptop,
                    label: "브라우저",
                },
                IconLabel {
                    icon: Icon::Server,
                    label: "서버",
                },
                IconLabel {
                    icon: Icon::Database,
                    label: "DB",
                },
            ])],
        ),
        Slide::new(
            "(OT 복습) API란?",
            vec![
                Block::text("API (Application Programming Interface)"),
                Block::text("프로그램 간 약속"),
                Block::text("브라우저 API, OS API, ..."),
                Block::text("비슷하게, 프론트엔드도 백엔드가 제공하는 API를 이용한다"),
                Block::Spacer,
                Block::Callout {
                    heading: "예시",
                    body: vec![
                        Inline::Code("https://jsonplaceholder.typicode.com/todos"),
                        Inline::Text("로 "),
                        Inline::Code("HTTP GET"),
                        Inline::Text(
                            " 요청을 보내면 userId, id, title, completed 키가 있는 JSON 배열 형태의 응답을 내려줄게",
                        ),
                    ],
                },
            ],
        ),
        Slide::new(
            "(OT 복습) HTTP",
            vec![
                Block::text("HyperText Transfer Protocol"),
                Block::text("데이터를 주고받기 위한 통신 규약"),
                Block::text("크게 method, path, header, body로 구성"),
                Block::Spacer,
                Block::Bullets(vec![
                    vec![Inline::Text("method: 요청의 종류 (GET, POST, PUT, DELETE 등)")],
                    vec![Inline::Text("path: 요청 대상 리소스의 위치 (url)")],
                    vec![Inline::Text(
                        "header: 요청에 대한 부가적인 정보 (인증 토큰, 컨텐츠 타입 등)",
                    )],
                    vec![Inline::Text(
                        "body: 요청에 포함되는 데이터 (주로 POST, PUT, PATCH 요청에서 사용)",
                    )],
                ]),
            ],
        ),
        Slide::new(
            "(OT 복습) JSON",
            vec![
                Block::text("JavaScript Object Notation"),
                Block::text("데이터를 표현하는 문자열"),
                text(&[Inline::Code(r#""{ "name": "우현민", "age": 23 }""#)]),
                Block::text("JavaScript의 객체와 거의 동일한 형태. 복받은거예요"),
                Block::text("API 응답/요청 내용의 대부분은 JSON 형태로 내려온다"),
            ],
        ),
        Slide::new(
            "fetch() API",
            vec![
                Block::Link {
                    href: "https://developer.mozilla.org/ko/docs/Web/API/Fetch_API",
                    label: Some("MDN Docs"),
                },
                Block::Code {
                    language: "javascript",
                    lines: vec![
                        "fetch('https://jsonplaceholder.typicode.com, {",
                        "  method: 'GET',",
                        "  headers: {",
                        "    'Content-Type': 'application/json'",
                        "  }",
                        "})",
                    ],
                },
            ],
        ),
        Slide::new(
            "API 요청/응답 스펙 예시 (1) JSON Placeholder",
            vec![
                Block::Link {
                    href: "https://jsonplaceholder.typicode.com/guide/",
                    label: None,
                },
                Block::Image {
                    file: "jsonplaceholder-example.png",
                },
            ],
        ),
        Slide::new(
            "API 요청/응답 스펙 예시 (2) SNUTT",
            vec![
                Block::Link {
                    href: "https://snutt-api-dev.wafflestudio.com/webjars/swagger-ui/index.html#/",
                    label: None,
                },
                Block::Image {
                    file: "snutt-example.png",
                },
            ],
        ),
        Slide::new(
            "직접 API 요청 해 보기",
            vec![Block::text(
                "브라우저 개발자 도구 열고, JSON Placeholder 에 아무 GET 요청이나 보내고, 각 조별 채널에 스크린샷 올려주세요",
            )],
        ),
        Slide::new(
            "React 에서 API 통신하기: 브레인스토밍",
            vec![
                Block::text("데이터를 받아서 상태에 저장하긴 해야 할 것 같다"),
                Block::Spacer,
                Block::text("데이터를 받고 나서 컴포넌트를 렌더할 수 있을까?"),
                Block::Code {
                    language: "javascript",
                    lines: vec!["// ❌", "const [data, setData] = useState(await fetch('...'))"],
                },
                Block::text("아쉽게도 이런 건 불가능. 조금 더 더럽게 접근해야 한다"),
            ],
        ),
        Slide::new(
            "React 에서 API 통신하기: 아이디어",
            vec![
                Block::text("데이터를 받아서 상태에 저장한다"),
                Block::text("데이터: 외부, 상태: 내부"),
                Block::text("외부와 내부 사이의 동기화!"),
                Block::Spacer,
                text(&[
                    Inline::Code("useEffect"),
                    Inline::Text("에서 받아서 상태에 저장하면 된다 ✅"),
                ]),
            ],
        ),
        Slide::new(
            "React 에서 API 통신하기: 가장 기본적인 형태",
            vec![
                text(&[
                    Inline::Code("useEffect"),
                    Inline::Text("에서 호출하고 상태에 저장한다"),
                ]),
                Block::Link {
                    href: "https://ko.react.dev/reference/react/useEffect#fetching-data-with-effects",
                    label: None,
                },
                Block::Code {
                    language: "tsx",
                    lines: snippet(&[
                        &TODO_RESPONSE_TYPE,
                        &FETCH_TODO,
                        &[
                            "export const TodoItem = ({ id }: { id: number }) => {",
                            "  const [todo, setTodo] = useState<TodoResponse>();",
                            "",
                            "  useEffect(() => {",
                            "    let ignore = false;",
                            "    fetchTodo(id).then((data) => {",
                            "      if (!ignore) setTodo(data));",
                            "    });",
                            "    return () => { ignore = true; };",
                            "  }, [id]);",
                            "",
                            "  return (",
                            "    <div>",
                            "      {todo ? todo.title : 'Loading...'}",
                            "    </div>",
                            "  );",
                            "}",
                        ],
                    ]),
                },
            ],
        ),
        Slide::new(
            "API 통신 시 주의할 점",
            vec![Block::Bullets(vec![
                vec![
                    Inline::Text("비동기니까, 당연히 처음에는 상태가 비어있습니다. "),
                    Inline::Code("undefined"),
                    Inline::Text("에 대한 조건부 렌더링이 필수입니다."),
                ],
                vec![
                    Inline::Text("버그를 방지하기 위해 "),
                    Inline::Code("useEffect"),
                    Inline::Text(" cleanup ("),
                    Inline::Code("ignore"),
                    Inline::Text(" 처리)도 필수입니다."),
                ],
                vec![Inline::Text(
                    "비동기는 동기 프로그래밍보다 어렵습니다. 익숙하지 않다면 async await 을 이리저리 붙였다 뗐다 하면서 문법을 가지고 삽질하시게 될 가능성이 높은데, 무슨 코드를 짜고 있는 건지 고민하고 이해하면 훨씬 시간을 절약할 수 있습니다. 워낙 어려운 부분이니 (늘 그랬지만) 질문도 편하게 하셔도 됩니다.",
                )],
            ])],
        ),
        Slide::new(
            "API 통신 코드를 좀더 깔끔하게 작성하도록 도와주는 라이브러리도 많다",
            vec![
                text(&[Inline::Text("대표적으로 "), Inline::Badge("Tanstack Query")]),
                Block::Code {
                    language: "tsx",
                    lines: snippet(&[
                        &["import { useQuery } from '@tanstack/react-query';"],
                        &TODO_RESPONSE_TYPE,
                        &FETCH_TODO,
                        &[
                            "export const TodoItem = ({ id }: { id: number }) => {",
                            "  const { data } = useQuery({",
                            "    queryKey: ['Todo', id] as const,",
                            "    queryFn: ({ queryKey }) => fetchTodo(queryKey[1]),",
                            "  });",
                            "",
                            "  return (",
                            "    <div>",
                            "      {data ? data.title : 'Loading...'}",
                            "    </div>",
                            "  );",
                            "}",
                        ],
                    ]),
                },
            ],
        ),
        Slide::new(
            "잠시 성능에 대한 이야기",
            vec![
                Block::text(
                    "이 방법이 CSR 형태의 리액트 SPA 어플리케이션에서 데이터 페칭 정석이긴 합니다만, 성능적으로 하자가 있습니다. 너무 늦게 호출해요",
                ),
                Block::Spacer,
                Block::text("이에 대한 이야기는 \"성능과 SSR\" 섹션에서 다시 다루겠습니다"),
            ],
        ),
        Slide::new(
            "todo list 만들어보기 라이브코딩",
            vec![
                Block::text(
                    "https://jsonplaceholder.typicode.com 의 todo 목록을 버튼 클릭으로 왔다갔다 할 수 있는 코드",
                ),
                Block::Spacer,
                Block::IconRow(vec![IconLabel {
                    icon: Icon::ArrowDown,
                    label: "이거 만들 거예요",
                }]),
                Block::LiveDemo,
            ],
        ),
    ]
}
